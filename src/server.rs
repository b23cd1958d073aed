//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory registry, wires the services and runs the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::MemoryRegistry;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory registry (optionally seeded with the demo app)
/// - Application services and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = if config.seed_sample_data {
        tracing::info!("Registry seeded with sample data");
        MemoryRegistry::with_sample_data()
    } else {
        tracing::info!("Registry started empty");
        MemoryRegistry::new()
    };

    let state = AppState::new(registry, config.platform_domain.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Received Ctrl+C, shutting down");
    }
}
