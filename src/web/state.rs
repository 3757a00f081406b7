//! # Web Application State
//!
//! Shared state for the web API. Everything here is immutable after startup
//! and cheap to share, so concurrent requests need no locking.

use std::time::Instant;

use crate::config::ServiceConfig;
use crate::validation::ValidationConfig;

/// Shared state for the web application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration resolved at startup
    pub config: ServiceConfig,

    /// Validation limits applied to every submission
    pub validation: ValidationConfig,

    start_time: Instant,
}

impl AppState {
    pub fn new(config: ServiceConfig, validation: ValidationConfig) -> Self {
        Self {
            config,
            validation,
            start_time: Instant::now(),
        }
    }

    /// Uptime in seconds since the state was constructed.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceConfig::default(), ValidationConfig::default())
    }
}
