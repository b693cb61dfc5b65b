use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::task_comments;
use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Task;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct TaskComment {
    pub id: ID,
    pub content: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub task_id: i32,
}

impl From<task_comments::Model> for TaskComment {
    fn from(model: task_comments::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            content: model.content,
            author_email: model.author_email,
            created_at: model.created_at,
            task_id: model.task_id,
        }
    }
}

#[ComplexObject]
impl TaskComment {
    async fn task(&self, ctx: &Context<'_>) -> Result<Task> {
        let context = ctx.data::<GraphQLContext>()?;
        let task = context
            .app
            .get_task(self.task_id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Task::from(task))
    }
}
