//! Handler for the simulated token deployment endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::token::{DeployTokenRequest, DeployTokenResponse};
use crate::application::services::DeployTokenInput;
use crate::error::AppError;
use crate::state::AppState;

/// Deploys a token. Simulated: no chain is contacted and the address is a
/// deterministic function of the minted token id.
///
/// # Endpoint
///
/// `POST /api/token/deploy`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Doge Classic",
///   "symbol": "doge2",
///   "initialSupply": 1000000   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if `name` or `symbol` is missing or blank.
pub async fn deploy_token_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeployTokenRequest>,
) -> Result<(StatusCode, Json<DeployTokenResponse>), AppError> {
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());
    let symbol = payload
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let (Some(name), Some(symbol)) = (name, symbol) else {
        return Err(AppError::bad_request(
            "name and symbol are required",
            json!({ "fields": ["name", "symbol"] }),
        ));
    };

    let token = state
        .token_service
        .deploy(DeployTokenInput {
            name: name.to_string(),
            symbol: symbol.to_string(),
            description: payload.description,
            logo: payload.logo,
            initial_supply: payload.initial_supply,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DeployTokenResponse {
            token_id: token.token_id,
            address: token.address,
            explorer_url: token.explorer_url,
            symbol: token.symbol,
            initial_supply: token.initial_supply,
        }),
    ))
}
