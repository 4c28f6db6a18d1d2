//! HTTP client configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::BackendClientError;

/// Connection settings for one of the marketplace's HTTP services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Service base URL, without trailing slash (e.g. `https://api.gigbook.app`)
    pub base_url: String,

    /// Overall request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// `User-Agent` header sent with every request
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

impl BackendConfig {
    /// Create a configuration with default timeouts for the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    /// Create a configuration suitable for testing against a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            timeout_secs: 2,
            connect_timeout_secs: 1,
            ..Self::new(base_url)
        }
    }

    /// Check that the base URL is an absolute http(s) URL and timeouts are set
    ///
    /// # Errors
    ///
    /// Returns `Configuration` describing the first problem found.
    pub fn validate(&self) -> Result<(), BackendClientError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            BackendClientError::Configuration(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(BackendClientError::Configuration(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(BackendClientError::Configuration(
                "Base URL must not contain a query or fragment".to_string(),
            ));
        }

        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(BackendClientError::Configuration(
                "Timeouts must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed
    pub(crate) fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Endpoint paths of the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPaths {
    /// Exchanges email and password for a session token
    #[serde(default = "default_login_path")]
    pub login: String,

    /// Exchanges the current session token for a new one
    #[serde(default = "default_refresh_path")]
    pub refresh: String,

    /// Invalidates a session token
    #[serde(default = "default_logout_path")]
    pub logout: String,
}

fn default_login_path() -> String {
    "/auth/login".to_string()
}

fn default_refresh_path() -> String {
    "/auth/refresh".to_string()
}

fn default_logout_path() -> String {
    "/auth/logout".to_string()
}

impl Default for AuthPaths {
    fn default() -> Self {
        Self {
            login: default_login_path(),
            refresh: default_refresh_path(),
            logout: default_logout_path(),
        }
    }
}
