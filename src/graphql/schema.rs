use std::sync::Arc;

use async_graphql::*;

use crate::app_context::AppContext;
use crate::graphql::context::GraphQLContext;
use crate::graphql::mutations::Mutation;
use crate::graphql::queries::Query;

pub type TrackerSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema once at startup; the router owns it from then on.
pub fn build_schema(app: Arc<AppContext>) -> TrackerSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(GraphQLContext::new(app))
        .finish()
}
