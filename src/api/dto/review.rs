//! DTOs for the review endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

use crate::domain::entities::Review;

/// Request body for `POST /api/app/{id}/review`.
///
/// A non-numeric `rating` deserializes to `None`; the handler rejects it
/// with the same 400 a missing rating gets.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub user_id: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

/// Response carrying the stored (possibly replaced) review.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    pub review: Review,
}
