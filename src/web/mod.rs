//! # Web API Module
//!
//! Axum-based REST API for the depsort service.
//!
//! ## Core Components
//!
//! - [`routes`] - HTTP route definitions and organization
//! - [`handlers`] - Request handlers for the pair and health endpoints
//! - [`state`] - Shared application state
//! - [`response_types`] - Response payloads and error types

use std::{sync::Arc, time::Duration};

use axum::http::{header, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod handlers;
pub mod response_types;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Create the web application with all routes and middleware.
///
/// Every response carries permissive CORS headers (any origin, GET/POST/
/// OPTIONS, Content-Type/Authorization) so browser clients can call the API
/// directly.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let common_middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(state.config.request_timeout_ms),
        ))
        .layer(cors);

    let app = Router::new()
        .merge(routes::pair_routes())
        .merge(routes::health_routes())
        .layer(common_middleware)
        .with_state(state);

    info!("web application created with all routes and middleware");
    app
}
