//! Repository trait for app records and their code payloads.

use crate::domain::entities::{App, NewApp};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for published apps.
///
/// Publication is a compound insert: the app record, its raw code payload
/// and the backing subdomain registration must become visible together or
/// not at all.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRegistry`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepository: Send + Sync {
    /// Atomically publishes a new app.
    ///
    /// Claims the subdomain, stores the code payload under a freshly minted
    /// code hash and inserts the app record in one critical section. No
    /// partially published app is ever observable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the subdomain was taken by the time
    /// the insert ran, regardless of any earlier availability check.
    async fn insert_published(&self, new_app: NewApp) -> Result<App, AppError>;

    /// Finds an app by id, regardless of status.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(App))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> Result<Option<App>, AppError>;

    /// Lists all published apps in insertion order.
    ///
    /// Filtering, sorting and pagination are catalog concerns and happen in
    /// the service layer.
    async fn list_published(&self) -> Result<Vec<App>, AppError>;

    /// Fetches a raw code payload by its code hash.
    ///
    /// The payload is served by the subdomain renderer, never through the
    /// registry API.
    async fn find_code(&self, code_hash: &str) -> Result<Option<String>, AppError>;
}
