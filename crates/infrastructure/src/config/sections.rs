//! Optional configuration sections with defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP client settings shared by the backend and auth clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpAppConfig {
    /// Overall request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("gigbook-client/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpAppConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Local storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the JSON slot files
    #[serde(default = "default_storage_dir")]
    pub directory: PathBuf,

    /// Suffix of the credential slot (`access_token_<namespace>`)
    #[serde(default = "default_session_namespace")]
    pub session_namespace: String,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".gigbook")
}

fn default_session_namespace() -> String {
    "web".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_storage_dir(),
            session_namespace: default_session_namespace(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// Log level filter (e.g. "info", "gigbook=debug,reqwest=warn"); `RUST_LOG` wins
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryAppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
        }
    }
}
