use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryAppConfig;

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured log filter does not parse
    #[error("Invalid log filter '{filter}': {message}")]
    Filter { filter: String, message: String },

    /// Failed to install the global subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Pick the log filter: an explicit directive from the environment wins,
/// otherwise the configured one is used
fn build_filter(
    config: &TelemetryAppConfig,
    env_directive: Option<&str>,
) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = env_directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
    {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_filter).map_err(|e| TelemetryError::Filter {
        filter: config.log_filter.clone(),
        message: e.to_string(),
    })
}

/// Install the global subscriber
///
/// Emits human-readable lines by default and JSON lines when
/// `config.json` is set. Can only succeed once per process.
///
/// # Errors
///
/// Returns `Filter` if the configured filter is invalid and `Init` if a
/// global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryAppConfig) -> Result<(), TelemetryError> {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(config, env_directive.as_deref())?;

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    info!(json = config.json, "Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(filter: &str) -> TelemetryAppConfig {
        TelemetryAppConfig {
            log_filter: filter.to_string(),
            json: false,
        }
    }

    #[test]
    fn configured_filter_is_used_without_env() {
        let filter = build_filter(&config("gigbook=debug"), None).unwrap();
        assert_eq!(filter.to_string(), "gigbook=debug");
    }

    #[test]
    fn env_directive_wins() {
        let filter = build_filter(&config("info"), Some("warn")).unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn blank_env_directive_is_ignored() {
        let filter = build_filter(&config("debug"), Some("  ")).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn invalid_configured_filter_is_an_error() {
        let err = build_filter(&config("gigbook=notalevel"), None).unwrap_err();
        assert!(matches!(err, TelemetryError::Filter { .. }));
    }

    #[test]
    fn second_init_fails() {
        let _ = init_telemetry(&config("info"));
        let err = init_telemetry(&config("info")).unwrap_err();
        assert!(matches!(err, TelemetryError::Init(_)));
    }
}
