//! # Structured Logging Module
//!
//! Environment-aware structured logging for the depsort service. Console
//! output is human-readable in development and JSON in production so log
//! collectors can ingest request diagnostics without extra parsing.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// `RUST_LOG` takes precedence over the environment-derived default level.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_log_level(&environment)));

        let subscriber = tracing_subscriber::registry();

        let result = if environment == "production" {
            subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(false)
                        .json()
                        .with_filter(filter),
                )
                .try_init()
        } else {
            subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(true)
                        .with_filter(filter),
                )
                .try_init()
        };

        // A subscriber may already be installed when tests spin up multiple
        // servers in one process; that is not an error.
        if result.is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }

        tracing::info!(environment = %environment, "structured logging initialized");
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("DEPSORT_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get default log level based on environment
fn default_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_detection() {
        std::env::set_var("DEPSORT_ENV", "test_override");
        let env = get_environment();
        assert_eq!(env, "test_override");
        std::env::remove_var("DEPSORT_ENV");
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(default_log_level("production"), "info");
        assert_eq!(default_log_level("development"), "debug");
        assert_eq!(default_log_level("unknown"), "debug");
    }
}
