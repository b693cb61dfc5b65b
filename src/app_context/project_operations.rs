use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, info};

use super::{not_found, AppContext, ProjectDetailsUpdate};
use crate::database::entities::{organizations, projects, tasks};
use crate::errors::{EntityKind, TrackerResult};

impl AppContext {
    // ----- Project helpers -------------------------------------------------

    /// Projects of the organization with `org_slug`, newest first.
    ///
    /// An unknown slug matches no rows and yields an empty list.
    pub async fn list_projects_for_organization(
        &self,
        org_slug: &str,
    ) -> TrackerResult<Vec<projects::Model>> {
        debug!(org_slug, "listing projects");
        let projects = projects::Entity::find()
            .inner_join(organizations::Entity)
            .filter(organizations::Column::Slug.eq(org_slug))
            .order_by_desc(projects::Column::CreatedAt)
            .order_by_desc(projects::Column::Id)
            .all(&self.db)
            .await?;

        Ok(projects)
    }

    pub async fn list_projects_by_organization_id(
        &self,
        organization_id: i32,
    ) -> TrackerResult<Vec<projects::Model>> {
        let projects = projects::Entity::find()
            .filter(projects::Column::OrganizationId.eq(organization_id))
            .order_by_desc(projects::Column::CreatedAt)
            .order_by_desc(projects::Column::Id)
            .all(&self.db)
            .await?;

        Ok(projects)
    }

    pub async fn get_project(&self, id: i32) -> TrackerResult<projects::Model> {
        debug!(project_id = id, "loading project");
        projects::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| not_found(EntityKind::Project, id))
    }

    pub async fn create_project(
        &self,
        org_slug: &str,
        name: String,
        description: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> TrackerResult<projects::Model> {
        let txn = self.db.begin().await?;

        let organization = organizations::Entity::find()
            .filter(organizations::Column::Slug.eq(org_slug))
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(EntityKind::Organization, org_slug))?;

        let mut project = projects::ActiveModel::new();
        project.organization_id = Set(organization.id);
        project.name = Set(name);
        project.description = Set(description.unwrap_or_default());
        project.due_date = Set(due_date);

        let project = project.insert(&txn).await?;
        txn.commit().await?;

        info!(
            project_id = project.id,
            organization_id = organization.id,
            "project created"
        );
        Ok(project)
    }

    pub async fn update_project_status(
        &self,
        id: i32,
        status: String,
    ) -> TrackerResult<projects::Model> {
        let txn = self.db.begin().await?;

        let project = projects::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(EntityKind::Project, id))?;

        let mut active: projects::ActiveModel = project.into();
        active.status = Set(status);

        let project = active.set_updated_at().update(&txn).await?;
        txn.commit().await?;

        info!(project_id = id, status = %project.status, "project status updated");
        Ok(project)
    }

    pub async fn update_project_details(
        &self,
        id: i32,
        update: ProjectDetailsUpdate,
    ) -> TrackerResult<projects::Model> {
        let policy = self.update_policy;
        let txn = self.db.begin().await?;

        let project = projects::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(EntityKind::Project, id))?;

        let mut active: projects::ActiveModel = project.into();
        if let Some(name) = policy.non_empty_text(update.name) {
            active.name = Set(name);
        }
        if let Some(description) = policy.present_text(update.description) {
            active.description = Set(description);
        }
        if let Some(due_date) = policy.nullable(update.due_date) {
            active.due_date = Set(due_date);
        }

        let project = active.set_updated_at().update(&txn).await?;
        txn.commit().await?;

        info!(project_id = id, policy = %policy, "project details updated");
        Ok(project)
    }

    /// Number of tasks referencing the project.
    pub async fn count_tasks(&self, project_id: i32) -> TrackerResult<u64> {
        let count = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    /// Number of the project's tasks whose status is exactly `DONE`.
    pub async fn count_completed_tasks(&self, project_id: i32) -> TrackerResult<u64> {
        let count = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id))
            .filter(tasks::Column::Status.eq(tasks::DONE_STATUS))
            .count(&self.db)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{AppContext, Patch, ProjectDetailsUpdate, UpdatePolicy};
    use crate::database::test_utils::setup_test_db;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_create_project_defaults() {
        let app = setup_app().await;
        let org = seed_org(&app, "acme").await;

        let project = seed_project(&app, "acme", "Launch").await;
        assert_eq!(project.organization_id, org.id);
        assert_eq!(project.name, "Launch");
        assert_eq!(project.description, "");
        assert_eq!(project.status, "ACTIVE");
        assert_eq!(project.due_date, None);
    }

    #[tokio::test]
    async fn test_create_project_for_unknown_org_fails() {
        let app = setup_app().await;
        let err = app
            .create_project("ghost", "Launch".to_string(), None, None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_projects_listed_newest_first_per_organization() {
        let app = setup_app().await;
        seed_org(&app, "acme").await;
        seed_org(&app, "globex").await;

        let first = seed_project(&app, "acme", "First").await;
        let second = seed_project(&app, "acme", "Second").await;
        seed_project(&app, "globex", "Elsewhere").await;

        let ids: Vec<i32> = app
            .list_projects_for_organization("acme")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);

        assert!(app
            .list_projects_for_organization("missing")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_update_project_status_is_idempotent() {
        let app = setup_app().await;
        seed_org(&app, "acme").await;
        let project = seed_project(&app, "acme", "Launch").await;

        let once = app
            .update_project_status(project.id, "ON_HOLD".to_string())
            .await
            .unwrap();
        let twice = app
            .update_project_status(project.id, "ON_HOLD".to_string())
            .await
            .unwrap();
        assert_eq!(once.status, "ON_HOLD");
        assert_eq!(twice.status, once.status);
        assert_eq!(twice.name, once.name);
    }

    #[tokio::test]
    async fn test_update_project_details_legacy_policy() {
        let app = setup_app().await;
        seed_org(&app, "acme").await;
        let project = seed_project(&app, "acme", "Launch").await;
        let due = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();

        let updated = app
            .update_project_details(
                project.id,
                ProjectDetailsUpdate {
                    name: Patch::Value(String::new()),
                    description: Patch::Value("Go to market".to_string()),
                    due_date: Patch::Value(due),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Launch");
        assert_eq!(updated.description, "Go to market");
        assert_eq!(updated.due_date, Some(due));

        let cleared = app
            .update_project_details(
                project.id,
                ProjectDetailsUpdate {
                    description: Patch::Value(String::new()),
                    due_date: Patch::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.description, "");
        assert_eq!(cleared.due_date, Some(due));
    }

    #[tokio::test]
    async fn test_update_project_details_explicit_presence_policy() {
        let app = AppContext::with_update_policy(
            setup_test_db().await,
            UpdatePolicy::ExplicitPresence,
        );
        seed_org(&app, "acme").await;
        let due = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        let project = app
            .create_project("acme", "Launch".to_string(), None, Some(due))
            .await
            .unwrap();

        let updated = app
            .update_project_details(
                project.id,
                ProjectDetailsUpdate {
                    name: Patch::Value(String::new()),
                    due_date: Patch::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "");
        assert_eq!(updated.due_date, None);
    }

    #[tokio::test]
    async fn test_update_missing_project_fails_before_write() {
        let app = setup_app().await;
        let err = app
            .update_project_status(404, "ACTIVE".to_string())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_task_counts() {
        let app = setup_app().await;
        seed_org(&app, "acme").await;
        let project = seed_project(&app, "acme", "Launch").await;
        assert_eq!(app.count_tasks(project.id).await.unwrap(), 0);

        let first = seed_task(&app, project.id, "Write copy").await;
        seed_task(&app, project.id, "Design banner").await;
        app.update_task_status(first.id, "DONE".to_string())
            .await
            .unwrap();

        assert_eq!(app.count_tasks(project.id).await.unwrap(), 2);
        assert_eq!(app.count_completed_tasks(project.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_completed_count_requires_exact_status() {
        let app = setup_app().await;
        seed_org(&app, "acme").await;
        let project = seed_project(&app, "acme", "Launch").await;
        let task = seed_task(&app, project.id, "Write copy").await;

        app.update_task_status(task.id, "done".to_string())
            .await
            .unwrap();
        assert_eq!(app.count_completed_tasks(project.id).await.unwrap(), 0);
    }
}
