use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::organizations;
use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Project;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Organization {
    pub id: ID,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub key: i32,
}

impl From<organizations::Model> for Organization {
    fn from(model: organizations::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            name: model.name,
            slug: model.slug,
            created_at: model.created_at,
            key: model.id,
        }
    }
}

#[ComplexObject]
impl Organization {
    /// Projects owned by this organization, newest first
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let projects = context
            .app
            .list_projects_by_organization_id(self.key)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(projects.into_iter().map(Project::from).collect())
    }
}
