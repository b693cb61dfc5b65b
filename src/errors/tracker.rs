use std::fmt;

use thiserror::Error;

/// Entities that can be looked up by key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityKind {
    Organization,
    Project,
    Task,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Organization => "Organization",
            EntityKind::Project => "Project",
            EntityKind::Task => "Task",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    /// A lookup by id or slug matched no row
    #[error("{entity} matching query does not exist: {key}")]
    NotFound { entity: EntityKind, key: String },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl TrackerError {
    pub fn not_found(entity: EntityKind, key: impl ToString) -> Self {
        TrackerError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackerError::NotFound { .. })
    }

    /// Get error code for GraphQL responses
    pub fn error_code(&self) -> &'static str {
        match self {
            TrackerError::NotFound { .. } => "NOT_FOUND",
            TrackerError::Database(_) => "DATABASE_ERROR",
        }
    }
}
