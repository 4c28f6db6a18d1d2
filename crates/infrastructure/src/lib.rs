//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports over the marketplace backend, the auth
//! service and the local file system, and wires them into a [`ClientContext`].

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::ClientContext;
pub use self::config::{AppConfig, HttpAppConfig, StorageConfig, TelemetryAppConfig};
pub use persistence::{
    JsonSlotStorage, PersistedCredentialStore, PersistedDraftStore, StorageError,
};
pub use telemetry::{TelemetryError, init_telemetry};
