use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info};

use super::{not_found, AppContext};
use crate::database::entities::organizations;
use crate::errors::{EntityKind, TrackerResult};

impl AppContext {
    // ----- Organization helpers --------------------------------------------
    pub async fn create_organization(
        &self,
        slug: String,
        name: String,
    ) -> TrackerResult<organizations::Model> {
        let mut organization = organizations::ActiveModel::new();
        organization.slug = Set(slug);
        organization.name = Set(name);

        let organization = organization.insert(&self.db).await?;
        info!(
            organization_id = organization.id,
            slug = %organization.slug,
            "organization created"
        );

        Ok(organization)
    }

    pub async fn list_organizations(&self) -> TrackerResult<Vec<organizations::Model>> {
        let organizations = organizations::Entity::find()
            .order_by_asc(organizations::Column::Slug)
            .all(&self.db)
            .await?;

        Ok(organizations)
    }

    pub async fn get_organization(&self, id: i32) -> TrackerResult<organizations::Model> {
        debug!(organization_id = id, "loading organization");
        organizations::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| not_found(EntityKind::Organization, id))
    }

    pub async fn get_organization_by_slug(
        &self,
        slug: &str,
    ) -> TrackerResult<organizations::Model> {
        debug!(slug, "loading organization by slug");
        organizations::Entity::find()
            .filter(organizations::Column::Slug.eq(slug))
            .one(&self.db)
            .await?
            .ok_or_else(|| not_found(EntityKind::Organization, slug))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;

    #[tokio::test]
    async fn test_create_and_lookup_organization() {
        let app = setup_app().await;
        let created = seed_org(&app, "acme").await;

        let by_slug = app.get_organization_by_slug("acme").await.unwrap();
        assert_eq!(by_slug.id, created.id);
        assert_eq!(by_slug.name, "acme Inc");

        let by_id = app.get_organization(created.id).await.unwrap();
        assert_eq!(by_id.slug, "acme");
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let app = setup_app().await;
        let err = app.get_organization_by_slug("nobody").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let app = setup_app().await;
        seed_org(&app, "acme").await;

        let err = app
            .create_organization("acme".to_string(), "Other".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_list_organizations_sorted_by_slug() {
        let app = setup_app().await;
        seed_org(&app, "zeta").await;
        seed_org(&app, "acme").await;

        let slugs: Vec<String> = app
            .list_organizations()
            .await
            .unwrap()
            .into_iter()
            .map(|org| org.slug)
            .collect();
        assert_eq!(slugs, vec!["acme", "zeta"]);
    }
}
