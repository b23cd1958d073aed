//! Handlers for catalog listing, search and single-app lookup.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::apps::{ListAppsQuery, ListAppsResponse, SearchQuery, SearchResponse};
use crate::application::services::ListAppsParams;
use crate::domain::entities::PublicApp;
use crate::error::AppError;
use crate::state::AppState;

/// Lists published apps with filtering, sorting and pagination.
///
/// # Endpoint
///
/// `GET /api/apps?category&sort&page&limit`
///
/// `category` defaults to `all`, `sort` to `hot`. Non-numeric `page`/`limit`
/// values fall back to 1/20; out-of-range values are clamped to [1, 999] and
/// [1, 100]. `total` counts matches before pagination.
pub async fn list_apps_handler(
    State(state): State<AppState>,
    Query(query): Query<ListAppsQuery>,
) -> Result<Json<ListAppsResponse>, AppError> {
    let page = state
        .catalog_service
        .list(ListAppsParams {
            category: query.category,
            sort: query.sort,
            page: query.page,
            limit: query.limit,
        })
        .await?;

    Ok(Json(ListAppsResponse {
        apps: page.apps,
        total: page.total,
        page: page.page,
        limit: page.limit,
    }))
}

/// Searches published apps by free text.
///
/// # Endpoint
///
/// `GET /api/apps/search?q=wheel`
///
/// Matches name, description, category and derived token symbol
/// (case-insensitive substring). A missing or empty query returns an empty
/// list, not the whole catalog.
pub async fn search_apps_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let apps = state
        .catalog_service
        .search(query.q.as_deref().unwrap_or(""))
        .await?;

    Ok(Json(SearchResponse { apps }))
}

/// Returns one published app by id.
///
/// # Endpoint
///
/// `GET /api/app/{id}`
///
/// # Errors
///
/// Returns 404 if the id is unknown or the app is not published.
pub async fn get_app_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PublicApp>, AppError> {
    let app = state.app_service.get_by_id(&id).await?;
    Ok(Json(app))
}
