use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::{not_found, AppContext, TaskDetailsUpdate};
use crate::database::entities::{projects, task_comments, tasks};
use crate::errors::{EntityKind, TrackerResult};

impl AppContext {
    // ----- Task helpers ----------------------------------------------------
    pub async fn get_task(&self, id: i32) -> TrackerResult<tasks::Model> {
        debug!(task_id = id, "loading task");
        tasks::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| not_found(EntityKind::Task, id))
    }

    pub async fn list_tasks_for_project(&self, project_id: i32) -> TrackerResult<Vec<tasks::Model>> {
        let tasks = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id))
            .order_by_asc(tasks::Column::Id)
            .all(&self.db)
            .await?;

        Ok(tasks)
    }

    pub async fn create_task(
        &self,
        project_id: i32,
        title: String,
        assignee_email: Option<String>,
    ) -> TrackerResult<tasks::Model> {
        let txn = self.db.begin().await?;

        let project = projects::Entity::find_by_id(project_id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(EntityKind::Project, project_id))?;

        let mut task = tasks::ActiveModel::new();
        task.project_id = Set(project.id);
        task.title = Set(title);
        task.assignee_email = Set(assignee_email.unwrap_or_default());

        let task = task.insert(&txn).await?;
        txn.commit().await?;

        info!(task_id = task.id, project_id, "task created");
        Ok(task)
    }

    pub async fn update_task_status(&self, id: i32, status: String) -> TrackerResult<tasks::Model> {
        let txn = self.db.begin().await?;

        let task = tasks::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(EntityKind::Task, id))?;

        let mut active: tasks::ActiveModel = task.into();
        active.status = Set(status);

        let task = active.set_updated_at().update(&txn).await?;
        txn.commit().await?;

        info!(task_id = id, status = %task.status, "task status updated");
        Ok(task)
    }

    pub async fn update_task_details(
        &self,
        id: i32,
        update: TaskDetailsUpdate,
    ) -> TrackerResult<tasks::Model> {
        let policy = self.update_policy;
        let txn = self.db.begin().await?;

        let task = tasks::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(EntityKind::Task, id))?;

        let mut active: tasks::ActiveModel = task.into();
        if let Some(title) = policy.non_empty_text(update.title) {
            active.title = Set(title);
        }
        if let Some(description) = policy.present_text(update.description) {
            active.description = Set(description);
        }
        if let Some(assignee_email) = policy.non_empty_text(update.assignee_email) {
            active.assignee_email = Set(assignee_email);
        }
        if let Some(due_date) = policy.nullable(update.due_date) {
            active.due_date = Set(due_date);
        }

        let task = active.set_updated_at().update(&txn).await?;
        txn.commit().await?;

        info!(task_id = id, policy = %policy, "task details updated");
        Ok(task)
    }

    // ----- Comment helpers -------------------------------------------------
    pub async fn add_comment(
        &self,
        task_id: i32,
        content: String,
        author_email: String,
    ) -> TrackerResult<task_comments::Model> {
        let txn = self.db.begin().await?;

        let task = tasks::Entity::find_by_id(task_id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(EntityKind::Task, task_id))?;

        let comment = task_comments::ActiveModel {
            task_id: Set(task.id),
            content: Set(content),
            author_email: Set(author_email),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let comment = comment.insert(&txn).await?;
        txn.commit().await?;

        info!(comment_id = comment.id, task_id, "comment added");
        Ok(comment)
    }

    /// Comments on a task, oldest first.
    pub async fn list_comments_for_task(
        &self,
        task_id: i32,
    ) -> TrackerResult<Vec<task_comments::Model>> {
        let comments = task_comments::Entity::find()
            .filter(task_comments::Column::TaskId.eq(task_id))
            .order_by_asc(task_comments::Column::CreatedAt)
            .order_by_asc(task_comments::Column::Id)
            .all(&self.db)
            .await?;

        Ok(comments)
    }
}
