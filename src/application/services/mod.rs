//! Application services.
//!
//! Each service owns the business rules for one slice of the platform and
//! talks to the store through its repository trait. Field conditioning and
//! defaulting happen here; the store only enforces uniqueness and keeps the
//! counters consistent.

pub mod app_service;
pub mod catalog_service;
pub mod domain_service;
pub mod review_service;
pub mod token_service;
pub mod usage_service;

pub use app_service::AppService;
pub use catalog_service::{CatalogPage, CatalogService, ListAppsParams};
pub use domain_service::DomainService;
pub use review_service::{ReviewService, SubmitReviewInput};
pub use token_service::{DeployTokenInput, TokenService};
pub use usage_service::{RecordUsageInput, UsageService};
