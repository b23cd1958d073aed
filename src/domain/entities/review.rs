//! Review entity for user ratings on published apps.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single user review attached to an app.
///
/// One review per user per app; resubmissions replace the rating and comment
/// in place while keeping the review id and its position in the list.
/// Serialized directly into API responses, hence the camelCase renames.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub rating: f64,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Conditioned input for creating or replacing a review.
///
/// Fields are already normalized by the service layer: `user_id` defaulted
/// and trimmed, `rating` clamped to 1-5, `comment` sanitized and truncated.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: String,
    pub rating: f64,
    pub comment: String,
}
