//! Database functionality tests
//!
//! Tests for migrations, entity operations, and referential integrity

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use sea_orm_migration::MigratorTrait;
use taskboard::database::entities::*;
use taskboard::database::migrations::Migrator;
use taskboard::database::{establish_connection, get_database_url, setup_database};
use tempfile::NamedTempFile;

/// Create a test database connection with migrations
async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = get_database_url(temp_file.path().to_str());

    let db = establish_connection(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

async fn insert_organization(db: &DatabaseConnection, slug: &str) -> Result<organizations::Model> {
    let mut organization = organizations::ActiveModel::new();
    organization.slug = Set(slug.to_string());
    organization.name = Set(format!("{} Inc", slug));
    Ok(organization.insert(db).await?)
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    assert!(organizations::Entity::find().all(&db).await?.is_empty());
    assert!(projects::Entity::find().all(&db).await?.is_empty());
    assert!(tasks::Entity::find().all(&db).await?.is_empty());
    assert!(task_comments::Entity::find().all(&db).await?.is_empty());

    // Running again is a no-op
    setup_database(&db).await?;

    Ok(())
}

#[tokio::test]
async fn test_migrate_down_drops_schema() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    Migrator::down(&db, None).await?;
    assert!(organizations::Entity::find().all(&db).await.is_err());

    Migrator::up(&db, None).await?;
    assert!(organizations::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_project_crud_operations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let organization = insert_organization(&db, "acme").await?;

    let mut new_project = projects::ActiveModel::new();
    new_project.organization_id = Set(organization.id);
    new_project.name = Set("Launch".to_string());
    new_project.due_date = Set(NaiveDate::from_ymd_opt(2026, 12, 1));

    let project = new_project.insert(&db).await?;
    assert_eq!(project.name, "Launch");
    assert_eq!(project.description, "");
    assert_eq!(project.status, projects::DEFAULT_STATUS);
    assert_eq!(project.created_at, project.updated_at);

    let found_project = projects::Entity::find_by_id(project.id)
        .one(&db)
        .await?
        .expect("Project should exist");
    assert_eq!(found_project.id, project.id);
    assert_eq!(found_project.organization_id, organization.id);
    assert_eq!(found_project.due_date, NaiveDate::from_ymd_opt(2026, 12, 1));

    let mut project_update: projects::ActiveModel = found_project.into();
    project_update.status = Set("ON_HOLD".to_string());
    let updated_project = project_update.set_updated_at().update(&db).await?;
    assert_eq!(updated_project.status, "ON_HOLD");
    assert!(updated_project.updated_at >= project.updated_at);

    let parent = updated_project
        .find_related(organizations::Entity)
        .one(&db)
        .await?
        .expect("Organization should exist");
    assert_eq!(parent.slug, "acme");

    Ok(())
}

#[tokio::test]
async fn test_organization_slug_is_unique() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    insert_organization(&db, "acme").await?;
    assert!(insert_organization(&db, "acme").await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_deleting_project_cascades_to_tasks_and_comments() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let organization = insert_organization(&db, "acme").await?;

    let mut project = projects::ActiveModel::new();
    project.organization_id = Set(organization.id);
    project.name = Set("Launch".to_string());
    let project = project.insert(&db).await?;

    let mut task = tasks::ActiveModel::new();
    task.project_id = Set(project.id);
    task.title = Set("Write copy".to_string());
    task.due_date = Set(Some(Utc::now()));
    let task = task.insert(&db).await?;
    assert_eq!(task.status, tasks::DEFAULT_STATUS);
    assert_eq!(task.assignee_email, "");

    let comment = task_comments::ActiveModel {
        task_id: Set(task.id),
        content: Set("Draft is up".to_string()),
        author_email: Set("a@acme.test".to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    comment.insert(&db).await?;

    projects::Entity::delete_by_id(project.id).exec(&db).await?;

    let remaining_tasks = tasks::Entity::find()
        .filter(tasks::Column::ProjectId.eq(project.id))
        .all(&db)
        .await?;
    assert!(remaining_tasks.is_empty());
    assert!(task_comments::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_task_requires_existing_project() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let mut task = tasks::ActiveModel::new();
    task.project_id = Set(404);
    task.title = Set("Orphan".to_string());
    assert!(task.insert(&db).await.is_err());

    Ok(())
}
