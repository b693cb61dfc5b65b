//! GraphQL conversion for tracker errors
//!
//! Errors are not caught by resolvers; they are converted here so the response
//! carries a machine-readable `code` extension next to the message.

#[cfg(feature = "graphql")]
use async_graphql::{Error as GraphQLError, ErrorExtensions};

#[cfg(feature = "graphql")]
use super::TrackerError;

/// Convert domain errors to GraphQL errors with error codes
#[cfg(feature = "graphql")]
pub trait ToGraphQLError {
    fn to_graphql_error(&self) -> GraphQLError;
}

#[cfg(feature = "graphql")]
impl ToGraphQLError for TrackerError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            if let TrackerError::NotFound { entity, key } = self {
                e.set("entity", entity.as_str());
                e.set("key", key.as_str());
            }
        })
    }
}
