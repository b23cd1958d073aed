//! Handler for the usage reporting endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::usage::{UseAppRequest, UseAppResponse};
use crate::application::services::RecordUsageInput;
use crate::error::AppError;
use crate::state::AppState;

/// Records one usage event against an app.
///
/// # Endpoint
///
/// `POST /api/app/{id}/use`
///
/// The body is optional; an empty report counts as an anonymous `open`.
/// Unknown actions count as `open`, negative or junk amounts as zero, so a
/// report is only ever rejected when the app does not exist.
///
/// # Errors
///
/// Returns 404 if the app id is unknown.
pub async fn use_app_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Option<Json<UseAppRequest>>,
) -> Result<Json<UseAppResponse>, AppError> {
    let body = payload.map(|Json(body)| body).unwrap_or_default();

    state
        .usage_service
        .record(
            &id,
            RecordUsageInput {
                user_id: body.user_id,
                action: body.action,
                amount: body.amount,
            },
        )
        .await?;

    Ok(Json(UseAppResponse { success: true }))
}
