//! DTOs for the app publication endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::PublicApp;

/// Request to publish an app.
///
/// Only `code` and `subdomain` are required; everything else is defaulted by
/// the service layer. Unknown `category`/`domainType` strings fall back to
/// `other`/`free` rather than failing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub code: Option<String>,
    pub subdomain: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub domain_type: Option<String>,
    pub token_id: Option<String>,
    pub icon: Option<String>,
}

/// Response for a successful publication.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub app_id: String,
    pub url: String,
    pub app: PublicApp,
}
