//! Depsort server entrypoint: bind the configured address and serve the
//! web API until a shutdown signal arrives.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use depsort::config::ServiceConfig;
use depsort::validation::ValidationConfig;
use depsort::web::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    depsort::logging::init_logging();

    let config = ServiceConfig::from_env();
    let state = Arc::new(AppState::new(config.clone(), ValidationConfig::default()));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    info!(bind_address = %config.bind_address, "depsort server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("depsort server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
