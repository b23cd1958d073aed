//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the mini-app registry. Entities are plain data structures with
//! only derived-value logic attached.
//!
//! # Entity Types
//!
//! - [`App`] - A published mini-app with its aggregate counters
//! - [`Domain`] - A registered platform subdomain
//! - [`Review`] - A user review attached to an app
//! - [`UsageEvent`] - One recorded interaction with an app
//! - [`DeployedToken`] - A simulated token deployment
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewApp`, `NewDomain`, `NewReview`, `NewUsageEvent`, `NewToken` carry
//!   conditioned input for inserts
//! - `PublicApp` is the read-side projection that leaves the API
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod app;
pub mod domain;
pub mod review;
pub mod token;
pub mod usage;

pub use app::{
    App, AppCategory, AppSort, AppStatus, NewApp, PublicApp, PublicCreator, PublicStats,
    PublicTokenInfo, PublishAppInput,
};
pub use domain::{Domain, DomainAvailability, DomainType, NewDomain};
pub use review::{NewReview, Review};
pub use token::{DeployedToken, NewToken};
pub use usage::{NewUsageEvent, UsageAction, UsageEvent};
