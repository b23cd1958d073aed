//! DTOs for the token deployment endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

/// Request body for `POST /api/token/deploy`.
///
/// `name` and `symbol` are required by the handler; a junk `initialSupply`
/// deserializes to `None` and falls back to the default supply.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployTokenRequest {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub initial_supply: Option<f64>,
}

/// Response for a successful (simulated) deployment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployTokenResponse {
    pub token_id: String,
    pub address: String,
    pub explorer_url: String,
    pub symbol: String,
    pub initial_supply: i64,
}
