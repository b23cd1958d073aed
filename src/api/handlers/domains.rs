//! Handlers for subdomain availability and registration.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::domain::{
    AvailabilityResponse, CheckDomainQuery, RegisterDomainRequest, RegisterDomainResponse,
};
use crate::domain::entities::DomainType;
use crate::error::AppError;
use crate::state::AppState;

/// Checks whether a subdomain can be registered, and at what price.
///
/// # Endpoint
///
/// `GET /api/domain/check?name=myshop&type=premium`
///
/// The check never mutates anything. A malformed, reserved or taken name is
/// reported as `available: false` with a reason, not as an error; only a
/// missing `name` parameter is a 400.
pub async fn check_domain_handler(
    State(state): State<AppState>,
    Query(query): Query<CheckDomainQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let name = query
        .name
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::bad_request("name is required", json!({ "field": "name" })))?;

    let availability = state
        .domain_service
        .check_availability(&name, DomainType::parse_lenient(query.r#type.as_deref()))
        .await?;

    Ok(Json(AvailabilityResponse {
        available: availability.available,
        price: availability.price,
        reason: availability.reason,
    }))
}

/// Registers a subdomain for an owner.
///
/// # Endpoint
///
/// `POST /api/domain/register`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "myshop",
///   "type": "premium",   // optional, defaults to "free"
///   "ownerId": "user-7"  // optional, defaults to "me"
/// }
/// ```
///
/// # Errors
///
/// - 400 if `name` is missing or blank
/// - 409 if the name is malformed, reserved or already taken
pub async fn register_domain_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDomainRequest>,
) -> Result<(StatusCode, Json<RegisterDomainResponse>), AppError> {
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::bad_request("name is required", json!({ "field": "name" })))?;

    let domain = state
        .domain_service
        .register(
            name,
            DomainType::parse_lenient(payload.r#type.as_deref()),
            payload.owner_id.unwrap_or_else(|| "me".to_string()),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterDomainResponse {
            domain: format!("{}.{}", domain.name, state.platform_domain),
            expires_at: domain.expires_at,
            price_paid: domain.price_paid,
        }),
    ))
}
