//! # Web API Response and Error Types
//!
//! Response payloads and the API error taxonomy with their HTTP
//! conversions. Leverages thiserror for structured error handling and
//! Axum's IntoResponse for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::graph::CycleDiagnostics;
use crate::validation::ValidationError;

/// Web API errors with HTTP status code mappings.
///
/// Cycle detection is deliberately absent: a cycle is an expected outcome of
/// arbitrary user input and is answered with a 200 diagnostic payload, not
/// an error status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("validation failed: {message}")]
    ValidationFailure { message: String },

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Create a MalformedRequest error echoing the parser's message
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Create a ValidationFailure error echoing the validator's message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailure {
            message: message.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            ApiError::MalformedRequest { message } => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            ApiError::ValidationFailure { message } => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for web API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Successful resolution: all nodes in dependency order.
#[derive(Debug, Clone, Serialize)]
pub struct SortResponse {
    pub sorted: Vec<String>,
}

/// Cycle diagnostic payload, served with HTTP 200.
#[derive(Debug, Clone, Serialize)]
pub struct CycleResponse {
    pub message: String,
    pub error: String,
    pub most_outgoing: String,
    pub least_incoming: String,
    pub most_outgoing_count: usize,
    pub least_incoming_count: usize,
}

impl From<CycleDiagnostics> for CycleResponse {
    fn from(diagnostics: CycleDiagnostics) -> Self {
        Self {
            message: "Cycle detected. Break cycle by removing edge".to_string(),
            error: "cycle detected".to_string(),
            most_outgoing: diagnostics.most_outgoing,
            least_incoming: diagnostics.least_incoming,
            most_outgoing_count: diagnostics.most_outgoing_count,
            least_incoming_count: diagnostics.least_incoming_count,
        }
    }
}

/// Simple health check response for probes.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness probe response with uptime information.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
}
