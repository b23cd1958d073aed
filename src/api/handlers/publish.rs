//! Handler for the app publication endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::publish::{PublishRequest, PublishResponse};
use crate::domain::entities::{AppCategory, DomainType, PublishAppInput};
use crate::error::AppError;
use crate::state::AppState;

/// Publishes a new app on a requested subdomain.
///
/// # Endpoint
///
/// `POST /api/app/publish`
///
/// # Request Body
///
/// ```json
/// {
///   "code": "<html>...</html>",
///   "subdomain": "mywheel",
///   "name": "My Wheel",          // optional
///   "category": "lottery",       // optional, defaults to "other"
///   "domainType": "premium",     // optional, defaults to "free"
///   "tokenId": "DOGE2"           // optional
/// }
/// ```
///
/// # Errors
///
/// - 400 if `code` or `subdomain` is missing or blank
/// - 409 if the subdomain is malformed, reserved or already taken
pub async fn publish_handler(
    State(state): State<AppState>,
    Json(payload): Json<PublishRequest>,
) -> Result<(StatusCode, Json<PublishResponse>), AppError> {
    let code = payload
        .code
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::bad_request("code is required", json!({ "field": "code" })))?
        .to_string();

    let subdomain = payload
        .subdomain
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppError::bad_request("subdomain is required", json!({ "field": "subdomain" }))
        })?
        .to_string();

    let app = state
        .app_service
        .publish(PublishAppInput {
            name: payload.name,
            description: payload.description,
            category: AppCategory::parse_lenient(payload.category.as_deref()),
            code,
            subdomain,
            domain_type: DomainType::parse_lenient(payload.domain_type.as_deref()),
            token_id: payload.token_id,
            creator_id: None,
            creator_name: None,
            icon: payload.icon,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PublishResponse {
            app_id: app.id.clone(),
            url: app.url.clone(),
            app,
        }),
    ))
}
