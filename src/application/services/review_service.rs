//! Review submission service.

use std::sync::Arc;

use crate::domain::entities::{NewReview, Review};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;
use crate::utils::sanitize::{sanitize_text, truncate_chars};

/// Raw review submission as accepted at the API boundary.
///
/// The boundary has already verified that `rating` is a finite number in
/// [1, 5]; the service clamps again so direct callers get the same result.
#[derive(Debug, Clone)]
pub struct SubmitReviewInput {
    pub user_id: Option<String>,
    pub rating: f64,
    pub comment: Option<String>,
}

/// Service upserting user reviews and keeping app ratings consistent.
pub struct ReviewService<R: ReviewRepository> {
    repository: Arc<R>,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Creates a new review service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates or replaces the caller's review for an app.
    ///
    /// # Conditioning
    ///
    /// - `user_id`: defaults to `anonymous` when missing or empty, then
    ///   trimmed. The default is applied before the trim, so a whitespace-only
    ///   id ends up as the empty string rather than `anonymous` — a quirk of
    ///   the platform contract that is kept as-is.
    /// - `rating`: non-finite values become 0, then the value is clamped to
    ///   [1, 5] (so 0 is stored as 1).
    /// - `comment`: trimmed, stripped of angle brackets, capped at 500 chars.
    ///
    /// The store recomputes the app's `rating` and `rating_count` from the
    /// full review list on every call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the app id does not exist.
    pub async fn add_or_update(
        &self,
        app_id: &str,
        input: SubmitReviewInput,
    ) -> Result<Review, AppError> {
        let user_id = input
            .user_id
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "anonymous".to_string())
            .trim()
            .to_string();

        let rating = if input.rating.is_finite() {
            input.rating.clamp(1.0, 5.0)
        } else {
            1.0
        };

        let comment = truncate_chars(
            &sanitize_text(input.comment.as_deref().unwrap_or("").trim()),
            500,
        );

        self.repository
            .upsert_review(
                app_id,
                NewReview {
                    user_id,
                    rating,
                    comment,
                },
            )
            .await
    }
}
