use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::tasks;
use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Project, TaskComment};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Task {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub assignee_email: String,
    pub due_date: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[graphql(skip)]
    pub key: i32,
    #[graphql(skip)]
    pub project_id: i32,
}

impl From<tasks::Model> for Task {
    fn from(model: tasks::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            title: model.title,
            description: model.description,
            assignee_email: model.assignee_email,
            due_date: model.due_date,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            key: model.id,
            project_id: model.project_id,
        }
    }
}

#[ComplexObject]
impl Task {
    async fn project(&self, ctx: &Context<'_>) -> Result<Project> {
        let context = ctx.data::<GraphQLContext>()?;
        let project = context
            .app
            .get_project(self.project_id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Project::from(project))
    }

    /// Comments on this task, oldest first
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<TaskComment>> {
        let context = ctx.data::<GraphQLContext>()?;
        let comments = context
            .app
            .list_comments_for_task(self.key)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(comments.into_iter().map(TaskComment::from).collect())
    }
}
