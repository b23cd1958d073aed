//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AppRepository`] - App publication, lookup and code payloads
//! - [`DomainRepository`] - Subdomain registration
//! - [`UsageRepository`] - Usage log and activity counters
//! - [`ReviewRepository`] - Review upserts and rating aggregation
//! - [`TokenRepository`] - Simulated token deployments
//!
//! # Testing
//!
//! See the store tests in `tests/registry_memory.rs` for usage examples.

pub mod app_repository;
pub mod domain_repository;
pub mod review_repository;
pub mod token_repository;
pub mod usage_repository;

pub use app_repository::AppRepository;
pub use domain_repository::DomainRepository;
pub use review_repository::ReviewRepository;
pub use token_repository::TokenRepository;
pub use usage_repository::UsageRepository;

#[cfg(test)]
pub use app_repository::MockAppRepository;
#[cfg(test)]
pub use domain_repository::MockDomainRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use usage_repository::MockUsageRepository;
