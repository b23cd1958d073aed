//! Repository trait for review storage and rating aggregation.

use crate::domain::entities::{NewReview, Review};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for app reviews.
///
/// Reviews are keyed by `(app, user_id)`: a resubmission replaces the
/// existing review in place, keeping its id and list position. Every write
/// recomputes the app's `rating` and `rating_count` from the full review
/// list, so the aggregate always matches the stored reviews after the first
/// real write, whatever the seed data claimed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRegistry`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Inserts or replaces the caller's review and refreshes the aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the app id does not exist.
    async fn upsert_review(&self, app_id: &str, review: NewReview) -> Result<Review, AppError>;
}
