//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured filter.

mod subscriber;

pub use subscriber::{TelemetryError, init_telemetry};
