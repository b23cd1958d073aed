//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::app_service::AppService`] - App publication and lookup
//! - [`services::catalog_service::CatalogService`] - Catalog listing and search
//! - [`services::domain_service::DomainService`] - Subdomain checks and registration
//! - [`services::usage_service::UsageService`] - Usage reporting and activity counters
//! - [`services::review_service::ReviewService`] - Review upserts and rating rollups
//! - [`services::token_service::TokenService`] - Simulated token deployment

pub mod services;
