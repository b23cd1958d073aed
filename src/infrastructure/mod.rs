//! Infrastructure layer for concrete data access.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! the concrete store behind the repository traits.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementation

pub mod persistence;
