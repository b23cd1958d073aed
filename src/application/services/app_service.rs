//! App publication and lookup service.

use std::sync::Arc;

use crate::domain::entities::{NewApp, PublicApp, PublishAppInput};
use crate::domain::repositories::AppRepository;
use crate::error::AppError;
use crate::utils::sanitize::{sanitize_text, truncate_chars};
use crate::utils::subdomain::{SubdomainError, normalize_subdomain, validate_subdomain};
use serde_json::json;

/// Service for publishing apps and serving their public projections.
///
/// Publication conditions all free-text fields before anything is stored and
/// claims the requested subdomain and the app record in one atomic store
/// operation.
pub struct AppService<R: AppRepository> {
    repository: Arc<R>,
    platform_domain: String,
}

impl<R: AppRepository> AppService<R> {
    /// Creates a new app service serving URLs under `platform_domain`.
    pub fn new(repository: Arc<R>, platform_domain: String) -> Self {
        Self {
            repository,
            platform_domain,
        }
    }

    /// Publishes a new app on the requested subdomain.
    ///
    /// # Field conditioning
    ///
    /// - `name`: falls back to the subdomain, stripped of angle brackets,
    ///   at most 64 chars; `"Untitled App"` if nothing survives
    /// - `description`: `"AI generated app"` when missing or empty, then
    ///   sanitized and capped at 400 chars
    /// - `icon`: trimmed, `"📱"` when missing or blank
    /// - creator defaults to the demo identity (`"me"` / `"CURRENT_USER"`)
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the normalized subdomain is empty
    /// - [`AppError::Conflict`] if the subdomain is malformed, reserved, or
    ///   taken (the store re-checks under its write lock)
    pub async fn publish(&self, input: PublishAppInput) -> Result<PublicApp, AppError> {
        let subdomain = normalize_subdomain(&input.subdomain);

        validate_subdomain(&subdomain).map_err(|reason| match reason {
            SubdomainError::Empty => {
                AppError::bad_request(reason.to_string(), json!({ "field": "subdomain" }))
            }
            _ => AppError::conflict(reason.to_string(), json!({ "name": subdomain })),
        })?;

        let name_raw = input.name.unwrap_or_else(|| subdomain.clone());
        let mut name = truncate_chars(&sanitize_text(&name_raw), 64);
        if name.is_empty() {
            name = "Untitled App".to_string();
        }

        let description_raw = input
            .description
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "AI generated app".to_string());
        let description = truncate_chars(&sanitize_text(&description_raw), 400);

        let icon = input
            .icon
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "📱".to_string());

        let app = self
            .repository
            .insert_published(NewApp {
                name,
                description,
                category: input.category,
                creator_id: input.creator_id.unwrap_or_else(|| "me".to_string()),
                creator_name: input
                    .creator_name
                    .unwrap_or_else(|| "CURRENT_USER".to_string()),
                subdomain,
                domain_type: input.domain_type,
                token_id: input.token_id,
                icon,
                code: input.code,
            })
            .await?;

        Ok(app.to_public(&self.platform_domain))
    }

    /// Returns the public projection of a published app.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no app has this id or the app is
    /// not published; the two cases are indistinguishable to the caller.
    pub async fn get_by_id(&self, id: &str) -> Result<PublicApp, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|app| app.is_published())
            .map(|app| app.to_public(&self.platform_domain))
            .ok_or_else(|| AppError::not_found("App not found", json!({ "id": id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{App, AppCategory, AppStatus, DomainType};
    use crate::domain::repositories::MockAppRepository;
    use chrono::Utc;

    fn app_from(new_app: &NewApp, status: AppStatus) -> App {
        let now = Utc::now();
        App {
            id: "app-11".to_string(),
            name: new_app.name.clone(),
            description: new_app.description.clone(),
            category: new_app.category,
            creator_id: new_app.creator_id.clone(),
            creator_name: new_app.creator_name.clone(),
            code_hash: "code:app-11:0".to_string(),
            subdomain: new_app.subdomain.clone(),
            domain_type: new_app.domain_type,
            token_id: new_app.token_id.clone(),
            total_users: 0,
            daily_active: 0,
            total_revenue: 0.0,
            rating: 0.0,
            rating_count: 0,
            reviews: Vec::new(),
            status,
            created_at: now,
            updated_at: now,
            icon: Some(new_app.icon.clone()),
        }
    }

    fn publish_input(subdomain: &str) -> PublishAppInput {
        PublishAppInput {
            name: Some("My App".to_string()),
            description: Some("Does things".to_string()),
            category: AppCategory::Tool,
            code: "<html></html>".to_string(),
            subdomain: subdomain.to_string(),
            domain_type: DomainType::Free,
            token_id: None,
            creator_id: None,
            creator_name: None,
            icon: None,
        }
    }

    #[tokio::test]
    async fn test_publish_success_builds_url() {
        let mut mock_repo = MockAppRepository::new();
        mock_repo
            .expect_insert_published()
            .withf(|new_app| new_app.subdomain == "myapp" && new_app.creator_id == "me")
            .times(1)
            .returning(|new_app| Ok(app_from(&new_app, AppStatus::Published)));

        let service = AppService::new(Arc::new(mock_repo), "tai.lat".to_string());

        let app = service.publish(publish_input("MyApp")).await.unwrap();

        assert_eq!(app.url, "https://myapp.tai.lat");
        assert_eq!(app.stats.users, 0);
        assert_eq!(app.rating, 0.0);
    }

    #[tokio::test]
    async fn test_publish_sanitizes_and_defaults_fields() {
        let mut mock_repo = MockAppRepository::new();
        mock_repo
            .expect_insert_published()
            .withf(|new_app| {
                new_app.name == "scriptbad/script"
                    && new_app.description == "AI generated app"
                    && new_app.icon == "📱"
                    && new_app.creator_name == "CURRENT_USER"
            })
            .times(1)
            .returning(|new_app| Ok(app_from(&new_app, AppStatus::Published)));

        let service = AppService::new(Arc::new(mock_repo), "tai.lat".to_string());

        let mut input = publish_input("clean");
        input.name = Some("<script>bad</script>".to_string());
        input.description = Some(String::new());
        input.icon = Some("   ".to_string());

        assert!(service.publish(input).await.is_ok());
    }

    #[tokio::test]
    async fn test_publish_name_falls_back_to_untitled() {
        let mut mock_repo = MockAppRepository::new();
        mock_repo
            .expect_insert_published()
            .withf(|new_app| new_app.name == "Untitled App")
            .times(1)
            .returning(|new_app| Ok(app_from(&new_app, AppStatus::Published)));

        let service = AppService::new(Arc::new(mock_repo), "tai.lat".to_string());

        let mut input = publish_input("clean");
        input.name = Some("<>".to_string());

        assert!(service.publish(input).await.is_ok());
    }

    #[tokio::test]
    async fn test_publish_invalid_subdomain_is_conflict() {
        let mock_repo = MockAppRepository::new();
        let service = AppService::new(Arc::new(mock_repo), "tai.lat".to_string());

        let result = service.publish(publish_input("bad_name!")).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_publish_reserved_subdomain_is_conflict() {
        let mock_repo = MockAppRepository::new();
        let service = AppService::new(Arc::new(mock_repo), "tai.lat".to_string());

        let result = service.publish(publish_input("api")).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_get_by_id_hides_unpublished_apps() {
        let mut mock_repo = MockAppRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|_| {
            let input = NewApp {
                name: "Hidden".to_string(),
                description: String::new(),
                category: AppCategory::Other,
                creator_id: "me".to_string(),
                creator_name: "CURRENT_USER".to_string(),
                subdomain: "hidden".to_string(),
                domain_type: DomainType::Free,
                token_id: None,
                icon: "📱".to_string(),
                code: String::new(),
            };
            Ok(Some(app_from(&input, AppStatus::Suspended)))
        });

        let service = AppService::new(Arc::new(mock_repo), "tai.lat".to_string());

        let result = service.get_by_id("app-11").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_app() {
        let mut mock_repo = MockAppRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = AppService::new(Arc::new(mock_repo), "tai.lat".to_string());

        let result = service.get_by_id("ghost").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
