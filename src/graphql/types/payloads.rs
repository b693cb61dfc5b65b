use async_graphql::*;

use crate::graphql::types::{Project, Task, TaskComment};

#[derive(SimpleObject)]
pub struct CreateProjectPayload {
    pub project: Project,
}

#[derive(SimpleObject)]
pub struct CreateTaskPayload {
    pub task: Task,
}

#[derive(SimpleObject)]
pub struct UpdateTaskStatusPayload {
    pub task: Task,
}

#[derive(SimpleObject)]
pub struct AddCommentPayload {
    pub comment: TaskComment,
}

#[derive(SimpleObject)]
pub struct UpdateProjectStatusPayload {
    pub project: Project,
}

#[derive(SimpleObject)]
pub struct UpdateProjectDetailsPayload {
    pub project: Project,
}

#[derive(SimpleObject)]
pub struct UpdateTaskDetailsPayload {
    pub task: Task,
}
