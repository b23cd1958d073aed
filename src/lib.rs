//! # Mini-App Store
//!
//! The app/domain registry core of a mini-app platform: publication,
//! subdomain allocation, usage analytics, reviews and catalog queries over a
//! single in-memory store, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory registry
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Atomic app publication with subdomain allocation
//! - Tiered subdomain pricing (free / premium by name length)
//! - Usage counters: lifetime users, active users, revenue
//! - One-review-per-user aggregation with recomputed ratings
//! - Catalog listing, sorting, pagination and free-text search
//! - Simulated token deployment with deterministic stub addresses
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything has defaults; tweak as needed
//! export LISTEN="0.0.0.0:3000"
//! export PLATFORM_DOMAIN="tai.lat"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AppService, CatalogService, DomainService, ReviewService, TokenService, UsageService,
    };
    pub use crate::domain::entities::{App, Domain, PublicApp, Review, UsageEvent};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryRegistry;
    pub use crate::state::AppState;
}
