//! Repository trait for deployed token records.

use crate::domain::entities::{DeployedToken, NewToken};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for simulated token deployments.
///
/// Token ids come from their own sequence, separate from the one backing
/// app, domain, usage and review ids.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRegistry`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Mints a token id, derives the stub address and stores the record.
    async fn insert_token(&self, token: NewToken) -> Result<DeployedToken, AppError>;

    /// Looks up a deployment by token id.
    async fn find_token(&self, token_id: &str) -> Result<Option<DeployedToken>, AppError>;
}
