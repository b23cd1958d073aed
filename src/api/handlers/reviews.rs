//! Handler for the review endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::review::{ReviewRequest, ReviewResponse};
use crate::application::services::SubmitReviewInput;
use crate::error::AppError;
use crate::state::AppState;

/// Creates or replaces the caller's review for an app.
///
/// # Endpoint
///
/// `POST /api/app/{id}/review`
///
/// One review per user per app: resubmitting replaces the rating and comment
/// in place. The app's aggregate rating is recomputed from the full review
/// list on every call.
///
/// # Errors
///
/// - 400 if `rating` is missing, not a number, or outside [1, 5]
/// - 404 if the app id is unknown
pub async fn review_app_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let rating = match payload.rating {
        Some(value) if value.is_finite() && (1.0..=5.0).contains(&value) => value,
        _ => {
            return Err(AppError::bad_request(
                "rating must be 1-5",
                json!({ "field": "rating" }),
            ));
        }
    };

    let review = state
        .review_service
        .add_or_update(
            &id,
            SubmitReviewInput {
                user_id: payload.user_id,
                rating,
                comment: payload.comment,
            },
        )
        .await?;

    Ok(Json(ReviewResponse {
        success: true,
        review,
    }))
}
