use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::app_context::{Patch, ProjectDetailsUpdate, TaskDetailsUpdate};
use crate::errors::{EntityKind, ToGraphQLError};
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{
    parse_id, AddCommentPayload, CreateProjectPayload, CreateTaskPayload, Date, Project, Task,
    TaskComment, UpdateProjectDetailsPayload, UpdateProjectStatusPayload,
    UpdateTaskDetailsPayload, UpdateTaskStatusPayload,
};

fn patch<T, U>(value: MaybeUndefined<T>) -> Patch<U>
where
    T: Into<U>,
{
    match value {
        MaybeUndefined::Undefined => Patch::Absent,
        MaybeUndefined::Null => Patch::Null,
        MaybeUndefined::Value(value) => Patch::Value(value.into()),
    }
}

pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a project under the organization identified by `orgSlug`
    async fn create_project(
        &self,
        ctx: &Context<'_>,
        org_slug: String,
        name: String,
        description: Option<String>,
        due_date: Option<Date>,
    ) -> Result<CreateProjectPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let project = context
            .app
            .create_project(&org_slug, name, description, due_date.map(Into::into))
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(CreateProjectPayload {
            project: Project::from(project),
        })
    }

    async fn create_task(
        &self,
        ctx: &Context<'_>,
        project_id: ID,
        title: String,
        assignee_email: Option<String>,
    ) -> Result<CreateTaskPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let project_key = parse_id(EntityKind::Project, &project_id)?;
        let task = context
            .app
            .create_task(project_key, title, assignee_email)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(CreateTaskPayload {
            task: Task::from(task),
        })
    }

    /// Overwrite a task's status; any string is accepted
    async fn update_task_status(
        &self,
        ctx: &Context<'_>,
        task_id: ID,
        status: String,
    ) -> Result<UpdateTaskStatusPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let task_key = parse_id(EntityKind::Task, &task_id)?;
        let task = context
            .app
            .update_task_status(task_key, status)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(UpdateTaskStatusPayload {
            task: Task::from(task),
        })
    }

    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        task_id: ID,
        content: String,
        author_email: String,
    ) -> Result<AddCommentPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let task_key = parse_id(EntityKind::Task, &task_id)?;
        let comment = context
            .app
            .add_comment(task_key, content, author_email)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(AddCommentPayload {
            comment: TaskComment::from(comment),
        })
    }

    /// Overwrite a project's status; any string is accepted
    async fn update_project_status(
        &self,
        ctx: &Context<'_>,
        project_id: ID,
        status: String,
    ) -> Result<UpdateProjectStatusPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let project_key = parse_id(EntityKind::Project, &project_id)?;
        let project = context
            .app
            .update_project_status(project_key, status)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(UpdateProjectStatusPayload {
            project: Project::from(project),
        })
    }

    /// Partially update a project; which arguments apply depends on the update policy
    async fn update_project_details(
        &self,
        ctx: &Context<'_>,
        project_id: ID,
        name: MaybeUndefined<String>,
        description: MaybeUndefined<String>,
        due_date: MaybeUndefined<Date>,
    ) -> Result<UpdateProjectDetailsPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let project_key = parse_id(EntityKind::Project, &project_id)?;
        let update = ProjectDetailsUpdate {
            name: patch(name),
            description: patch(description),
            due_date: patch(due_date),
        };
        let project = context
            .app
            .update_project_details(project_key, update)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(UpdateProjectDetailsPayload {
            project: Project::from(project),
        })
    }

    /// Partially update a task; which arguments apply depends on the update policy
    async fn update_task_details(
        &self,
        ctx: &Context<'_>,
        task_id: ID,
        title: MaybeUndefined<String>,
        description: MaybeUndefined<String>,
        assignee_email: MaybeUndefined<String>,
        due_date: MaybeUndefined<DateTime<Utc>>,
    ) -> Result<UpdateTaskDetailsPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let task_key = parse_id(EntityKind::Task, &task_id)?;
        let update = TaskDetailsUpdate {
            title: patch(title),
            description: patch(description),
            assignee_email: patch(assignee_email),
            due_date: patch(due_date),
        };
        let task = context
            .app
            .update_task_details(task_key, update)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(UpdateTaskDetailsPayload {
            task: Task::from(task),
        })
    }
}
