//! DTOs for the usage reporting endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

/// Request body for `POST /api/app/{id}/use`.
///
/// The whole body is optional at the endpoint and every field is optional
/// here; a junk `amount` (string, null) deserializes to `None` instead of
/// rejecting the report.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseAppRequest {
    pub user_id: Option<String>,
    pub action: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub amount: Option<f64>,
}

/// Acknowledgement for a recorded usage event.
#[derive(Debug, Serialize)]
pub struct UseAppResponse {
    pub success: bool,
}
