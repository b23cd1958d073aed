#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use miniapp_store::api::handlers::health_handler;
use miniapp_store::api::routes::public_routes;
use miniapp_store::infrastructure::persistence::MemoryRegistry;
use miniapp_store::state::AppState;
use serde_json::{Value, json};

pub const PLATFORM_DOMAIN: &str = "tai.lat";

/// Test server over a registry preloaded with the demo lottery app (`app-1`).
pub fn seeded_server() -> TestServer {
    make_server(MemoryRegistry::with_sample_data())
}

/// Test server over an empty registry.
pub fn empty_server() -> TestServer {
    make_server(MemoryRegistry::new())
}

pub fn make_server(registry: MemoryRegistry) -> TestServer {
    let state = AppState::new(registry, PLATFORM_DOMAIN.to_string());
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", public_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// Publishes a minimal tool app on `subdomain` and returns its id.
pub async fn publish_app(server: &TestServer, subdomain: &str) -> String {
    let response = server
        .post("/api/app/publish")
        .json(&json!({
            "code": "<html><body>demo</body></html>",
            "subdomain": subdomain,
            "name": format!("App {subdomain}"),
            "category": "tool"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["appId"].as_str().unwrap().to_string()
}
