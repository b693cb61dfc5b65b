pub mod organization;
pub mod payloads;
pub mod project;
pub mod scalars;
pub mod task;
pub mod task_comment;

pub use organization::*;
pub use payloads::*;
pub use project::*;
pub use scalars::*;
pub use task::*;
pub use task_comment::*;

use async_graphql::ID;

use crate::errors::{EntityKind, ToGraphQLError, TrackerError};

/// Parse a GraphQL `ID` into a row key. A non-numeric id cannot match any row.
pub(crate) fn parse_id(entity: EntityKind, id: &ID) -> async_graphql::Result<i32> {
    id.parse::<i32>()
        .map_err(|_| TrackerError::not_found(entity, id.as_str()).to_graphql_error())
}
