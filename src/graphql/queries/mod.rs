use async_graphql::*;

use crate::errors::{EntityKind, ToGraphQLError};
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{parse_id, Project, Task};

pub struct Query;

#[Object]
impl Query {
    /// Projects of an organization, newest first. Unknown slugs yield an empty list.
    async fn projects(&self, ctx: &Context<'_>, org_slug: String) -> Result<Vec<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let projects = context
            .app
            .list_projects_for_organization(&org_slug)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(projects.into_iter().map(Project::from).collect())
    }

    /// Get a specific project by ID. A missing row is an error on this field only.
    async fn project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let key = parse_id(EntityKind::Project, &id)?;
        let project = context
            .app
            .get_project(key)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Some(Project::from(project)))
    }

    /// Get a specific task by ID. A missing row is an error on this field only.
    async fn task(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Task>> {
        let context = ctx.data::<GraphQLContext>()?;
        let key = parse_id(EntityKind::Task, &id)?;
        let task = context
            .app
            .get_task(key)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Some(Task::from(task)))
    }
}
