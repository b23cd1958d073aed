//! API route configuration.

use crate::api::handlers::{
    check_domain_handler, deploy_token_handler, get_app_handler, list_apps_handler,
    publish_handler, register_domain_handler, review_app_handler, search_apps_handler,
    use_app_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `GET  /apps`              - List published apps (filter, sort, paginate)
/// - `GET  /apps/search`       - Free-text search over published apps
/// - `GET  /app/{id}`          - Fetch one published app
/// - `POST /app/{id}/use`      - Record a usage event
/// - `POST /app/{id}/review`   - Create or replace a review
/// - `POST /app/publish`       - Publish an app on a subdomain
/// - `GET  /domain/check`      - Check subdomain availability and price
/// - `POST /domain/register`   - Register a subdomain
/// - `POST /token/deploy`      - Deploy a token (simulated)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/apps", get(list_apps_handler))
        .route("/apps/search", get(search_apps_handler))
        .route("/app/publish", post(publish_handler))
        .route("/app/{id}", get(get_app_handler))
        .route("/app/{id}/use", post(use_app_handler))
        .route("/app/{id}/review", post(review_app_handler))
        .route("/domain/check", get(check_domain_handler))
        .route("/domain/register", post(register_domain_handler))
        .route("/token/deploy", post(deploy_token_handler))
}
