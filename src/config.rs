//! # Service Configuration
//!
//! Process-level configuration for the depsort service. The service is
//! deliberately knob-free: the listening port is the only value that can be
//! overridden from the environment, everything else is fixed at startup.

use serde::Serialize;

/// Environment variable that overrides the listening port.
pub const PORT_ENV_VAR: &str = "DEPSORT_PORT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Configuration for the web service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub request_timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("{DEFAULT_HOST}:{DEFAULT_PORT}"),
            request_timeout_ms: 30000,
        }
    }
}

impl ServiceConfig {
    /// Resolve configuration from the environment.
    ///
    /// Only the listening port is overridable (via `DEPSORT_PORT`); a value
    /// that fails to parse as a port falls back to the default.
    pub fn from_env() -> Self {
        let port = std::env::var(PORT_ENV_VAR)
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            bind_address: format!("{DEFAULT_HOST}:{port}"),
            ..Self::default()
        }
    }
}
