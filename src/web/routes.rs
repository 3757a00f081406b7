//! # Web API Routes
//!
//! Route definitions for all endpoints organized by functionality.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers, state::AppState};

/// Precedence pair submission routes
pub fn pair_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/submit_pairs", post(handlers::pairs::submit_pairs))
}

/// Health check routes for monitoring and Kubernetes probes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness_check))
        .route("/health/ready", get(handlers::health::readiness_check))
}
