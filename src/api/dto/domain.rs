//! DTOs for subdomain availability and registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/domain/check`.
#[derive(Debug, Deserialize)]
pub struct CheckDomainQuery {
    pub name: Option<String>,
    pub r#type: Option<String>,
}

/// Availability verdict for a candidate name.
///
/// `reason` is present exactly when `available` is false.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub price: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Request body for `POST /api/domain/register`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDomainRequest {
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub owner_id: Option<String>,
}

/// Response for a successful registration.
///
/// `domain` is the fully qualified name under the platform domain.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDomainResponse {
    pub domain: String,
    pub expires_at: DateTime<Utc>,
    pub price_paid: u32,
}
