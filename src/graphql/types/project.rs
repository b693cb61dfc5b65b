use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::projects;
use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Date, Organization, Task};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Project {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub due_date: Option<Date>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[graphql(skip)]
    pub key: i32,
    #[graphql(skip)]
    pub organization_id: i32,
}

impl From<projects::Model> for Project {
    fn from(model: projects::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            name: model.name,
            description: model.description,
            due_date: model.due_date.map(Date::from),
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            key: model.id,
            organization_id: model.organization_id,
        }
    }
}

#[ComplexObject]
impl Project {
    async fn organization(&self, ctx: &Context<'_>) -> Result<Organization> {
        let context = ctx.data::<GraphQLContext>()?;
        let organization = context
            .app
            .get_organization(self.organization_id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Organization::from(organization))
    }

    async fn tasks(&self, ctx: &Context<'_>) -> Result<Vec<Task>> {
        let context = ctx.data::<GraphQLContext>()?;
        let tasks = context
            .app
            .list_tasks_for_project(self.key)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(tasks.into_iter().map(Task::from).collect())
    }

    /// Number of tasks in the project, counted at resolve time
    async fn task_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let context = ctx.data::<GraphQLContext>()?;
        let count = context
            .app
            .count_tasks(self.key)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(count as i64)
    }

    /// Number of tasks whose status is `DONE`, counted at resolve time
    async fn completed_task_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let context = ctx.data::<GraphQLContext>()?;
        let count = context
            .app
            .count_completed_tasks(self.key)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(count as i64)
    }
}
