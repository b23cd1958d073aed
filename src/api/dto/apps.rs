//! DTOs for catalog listing and search endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

use crate::domain::entities::PublicApp;

/// Query parameters for `GET /api/apps`.
///
/// `page` and `limit` tolerate non-numeric values: anything that does not
/// parse becomes `None` and falls back to the service defaults.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListAppsQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub page: Option<i64>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub limit: Option<i64>,
}

/// Query parameters for `GET /api/apps/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// One page of the catalog.
#[derive(Debug, Serialize)]
pub struct ListAppsResponse {
    pub apps: Vec<PublicApp>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// Search results. Always present, possibly empty.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub apps: Vec<PublicApp>,
}
