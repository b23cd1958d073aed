//! Repository trait for domain registration data access.

use crate::domain::entities::{Domain, NewDomain};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered subdomains.
///
/// The normalized domain name is the uniqueness key. Uniqueness is enforced
/// here, at insert time, under the store's write lock; callers must treat
/// any earlier availability check as advisory.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRegistry`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Registers a domain under its normalized name.
    ///
    /// Mints the id, stamps `created_at` and computes the expiry one
    /// calendar year out.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already registered.
    async fn insert(&self, new_domain: NewDomain) -> Result<Domain, AppError>;

    /// Looks up a registration by normalized name.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Domain))` if registered
    /// - `Ok(None)` if the name is free
    async fn find_by_name(&self, name: &str) -> Result<Option<Domain>, AppError>;
}
