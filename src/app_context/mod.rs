use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::errors::{EntityKind, TrackerError};

mod organization_operations;
mod project_operations;
mod task_operations;
mod update_policy;

pub use update_policy::{Patch, UpdatePolicy};

/// Data-access layer shared by the GraphQL resolvers and the operator CLI.
///
/// Every mutation performs one parent lookup and one write inside a single
/// transaction; a failed lookup aborts before anything is written.
#[derive(Clone)]
pub struct AppContext {
    db: DatabaseConnection,
    update_policy: UpdatePolicy,
}

impl AppContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_update_policy(db, UpdatePolicy::default())
    }

    pub fn with_update_policy(db: DatabaseConnection, update_policy: UpdatePolicy) -> Self {
        Self { db, update_policy }
    }
}

fn not_found(entity: EntityKind, key: impl ToString) -> TrackerError {
    let key = key.to_string();
    warn!(entity = entity.as_str(), key = %key, "lookup matched no row");
    TrackerError::NotFound { entity, key }
}

// ----- Public types -----

/// Optional arguments of `updateProjectDetails`.
#[derive(Clone, Debug, Default)]
pub struct ProjectDetailsUpdate {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub due_date: Patch<NaiveDate>,
}

/// Optional arguments of `updateTaskDetails`.
#[derive(Clone, Debug, Default)]
pub struct TaskDetailsUpdate {
    pub title: Patch<String>,
    pub description: Patch<String>,
    pub assignee_email: Patch<String>,
    pub due_date: Patch<DateTime<Utc>>,
}
