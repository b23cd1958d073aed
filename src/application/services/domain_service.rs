//! Subdomain availability and registration service.

use std::sync::Arc;

use crate::domain::entities::{Domain, DomainAvailability, DomainType, NewDomain};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use crate::utils::subdomain::{SubdomainError, normalize_subdomain, validate_subdomain};
use serde_json::json;

/// Service for checking and registering platform subdomains.
///
/// Availability checks never mutate anything and report a reason instead of
/// failing; registration re-runs the full rule set and relies on the store
/// to enforce uniqueness under its write lock, so a name that was free at
/// check time can still be rejected at register time.
pub struct DomainService<R: DomainRepository> {
    repository: Arc<R>,
}

impl<R: DomainRepository> DomainService<R> {
    /// Creates a new domain service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Reports whether a candidate name can be registered, and at what price.
    ///
    /// The name is normalized (trim + lowercase) before any rule runs. The
    /// check fails closed: an empty, malformed, reserved or already-taken
    /// name yields `available: false` with the matching reason string, and a
    /// price of zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only if the store lookup itself fails;
    /// rule violations are not errors here.
    pub async fn check_availability(
        &self,
        name: &str,
        domain_type: DomainType,
    ) -> Result<DomainAvailability, AppError> {
        let normalized = normalize_subdomain(name);

        if let Err(reason) = validate_subdomain(&normalized) {
            return Ok(DomainAvailability::unavailable(reason.to_string()));
        }

        if self.repository.find_by_name(&normalized).await?.is_some() {
            return Ok(DomainAvailability::unavailable("Domain already taken"));
        }

        Ok(DomainAvailability::available(
            domain_type.price(&normalized),
        ))
    }

    /// Registers a domain for an owner.
    ///
    /// Validation is always re-run in full; a prior [`Self::check_availability`]
    /// result is never trusted. The store enforces name uniqueness again at
    /// insert time, so a concurrent registration of the same name still fails
    /// here.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the normalized name is empty
    /// - [`AppError::Conflict`] if the name is malformed, reserved or taken
    pub async fn register(
        &self,
        name: &str,
        domain_type: DomainType,
        owner_id: String,
    ) -> Result<Domain, AppError> {
        let normalized = normalize_subdomain(name);

        validate_subdomain(&normalized).map_err(|reason| match reason {
            SubdomainError::Empty => {
                AppError::bad_request(reason.to_string(), json!({ "field": "name" }))
            }
            _ => AppError::conflict(reason.to_string(), json!({ "name": normalized })),
        })?;

        self.repository
            .insert(NewDomain {
                name: normalized,
                owner_id,
                domain_type,
                app_id: None,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockDomainRepository;
    use chrono::Utc;

    fn registered_domain(name: &str) -> Domain {
        Domain {
            id: "domain-1".to_string(),
            name: name.to_string(),
            owner_id: "user-1".to_string(),
            app_id: None,
            domain_type: DomainType::Free,
            price_paid: 0,
            expires_at: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_check_availability_free_name() {
        let mut mock_repo = MockDomainRepository::new();
        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "myshop")
            .times(1)
            .returning(|_| Ok(None));

        let service = DomainService::new(Arc::new(mock_repo));

        let result = service
            .check_availability("  MyShop ", DomainType::Free)
            .await
            .unwrap();

        assert!(result.available);
        assert_eq!(result.price, 0);
        assert!(result.reason.is_none());
    }

    #[tokio::test]
    async fn test_check_availability_premium_pricing_tiers() {
        let mut mock_repo = MockDomainRepository::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));

        let service = DomainService::new(Arc::new(mock_repo));

        let short = service
            .check_availability("doge", DomainType::Premium)
            .await
            .unwrap();
        let long = service
            .check_availability("lottery", DomainType::Premium)
            .await
            .unwrap();

        assert_eq!(short.price, 100);
        assert_eq!(long.price, 30);
    }

    #[tokio::test]
    async fn test_check_availability_empty_name() {
        let mock_repo = MockDomainRepository::new();
        let service = DomainService::new(Arc::new(mock_repo));

        let result = service
            .check_availability("   ", DomainType::Free)
            .await
            .unwrap();

        assert!(!result.available);
        assert_eq!(result.reason.as_deref(), Some("Domain name is required"));
    }

    #[tokio::test]
    async fn test_check_availability_bad_pattern() {
        let mock_repo = MockDomainRepository::new();
        let service = DomainService::new(Arc::new(mock_repo));

        let result = service
            .check_availability("my_shop!", DomainType::Free)
            .await
            .unwrap();

        assert!(!result.available);
        assert_eq!(
            result.reason.as_deref(),
            Some("Domain must be 3-32 chars of lowercase letters, numbers, hyphen")
        );
    }

    #[tokio::test]
    async fn test_check_availability_reserved() {
        let mock_repo = MockDomainRepository::new();
        let service = DomainService::new(Arc::new(mock_repo));

        let result = service
            .check_availability("admin", DomainType::Free)
            .await
            .unwrap();

        assert!(!result.available);
        assert_eq!(result.reason.as_deref(), Some("Reserved domain"));
    }

    #[tokio::test]
    async fn test_check_availability_taken() {
        let mut mock_repo = MockDomainRepository::new();
        let existing = registered_domain("shop");
        mock_repo
            .expect_find_by_name()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        let service = DomainService::new(Arc::new(mock_repo));

        let result = service
            .check_availability("shop", DomainType::Free)
            .await
            .unwrap();

        assert!(!result.available);
        assert_eq!(result.reason.as_deref(), Some("Domain already taken"));
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut mock_repo = MockDomainRepository::new();
        let created = registered_domain("myshop");
        mock_repo
            .expect_insert()
            .withf(|new_domain| new_domain.name == "myshop" && new_domain.owner_id == "user-7")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = DomainService::new(Arc::new(mock_repo));

        let result = service
            .register("MyShop", DomainType::Free, "user-7".to_string())
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "myshop");
    }

    #[tokio::test]
    async fn test_register_empty_name_is_validation_error() {
        let mock_repo = MockDomainRepository::new();
        let service = DomainService::new(Arc::new(mock_repo));

        let result = service
            .register("  ", DomainType::Free, "me".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_register_reserved_name_is_conflict() {
        let mock_repo = MockDomainRepository::new();
        let service = DomainService::new(Arc::new(mock_repo));

        let result = service
            .register("builder", DomainType::Free, "me".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_register_taken_name_fails_at_insert() {
        let mut mock_repo = MockDomainRepository::new();
        mock_repo.expect_insert().times(1).returning(|new_domain| {
            Err(AppError::conflict(
                "Domain already taken",
                json!({ "name": new_domain.name }),
            ))
        });

        let service = DomainService::new(Arc::new(mock_repo));

        let result = service
            .register("shop", DomainType::Free, "me".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }
}
