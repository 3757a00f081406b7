//! # Health Check Handlers
//!
//! Kubernetes-compatible health check endpoints for monitoring and load
//! balancing. The service holds no external connections, so readiness is a
//! function of the process being up.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::web::response_types::{HealthResponse, ReadinessResponse};
use crate::web::state::AppState;

/// Basic health check endpoint: GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Kubernetes liveness probe: GET /health/live
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Kubernetes readiness probe: GET /health/ready
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready".to_string(),
        timestamp: Utc::now(),
        uptime_seconds: state.uptime_seconds(),
    })
}
