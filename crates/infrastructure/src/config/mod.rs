//! Application configuration
//!
//! Loaded from an optional `gigbook.toml` in the working directory, then
//! overridden by `GIGBOOK_*` environment variables. Nested keys use a double
//! underscore: `GIGBOOK_HTTP__TIMEOUT_SECS=10` sets `http.timeout_secs`.
//!
//! The service URLs, the OAuth client id and the maps API key have no
//! defaults. Loading fails if any of them is missing or empty, naming the
//! variable.

mod sections;

use application::error::ApplicationError;
use config::builder::{ConfigBuilder, DefaultState};
use integration_backend::{AuthPaths, BackendConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::persistence::{ACCESS_TOKEN_SLOT_PREFIX, is_valid_slot_name};

pub use sections::{HttpAppConfig, StorageConfig, TelemetryAppConfig};

/// Prefix of all environment variables read by the client
pub const ENV_PREFIX: &str = "GIGBOOK";

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "gigbook";

/// Configuration as read from the sources, before required values are checked
#[derive(Debug, Default, Deserialize)]
struct RawAppConfig {
    backend_url: Option<String>,
    auth_url: Option<String>,
    page_url: Option<String>,
    oauth_client_id: Option<String>,
    maps_api_key: Option<SecretString>,
    #[serde(default)]
    http: HttpAppConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    telemetry: TelemetryAppConfig,
    #[serde(default)]
    auth: AuthPaths,
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Marketplace REST API base URL (`GIGBOOK_BACKEND_URL`)
    pub backend_url: Url,

    /// Auth service base URL (`GIGBOOK_AUTH_URL`)
    pub auth_url: Url,

    /// Public site URL used for links in mails and redirects (`GIGBOOK_PAGE_URL`)
    pub page_url: Url,

    /// OAuth client id for social login (`GIGBOOK_OAUTH_CLIENT_ID`)
    pub oauth_client_id: String,

    maps_api_key: SecretString,

    /// HTTP client settings
    pub http: HttpAppConfig,

    /// Local storage settings
    pub storage: StorageConfig,

    /// Logging settings
    pub telemetry: TelemetryAppConfig,

    /// Auth service endpoint paths
    pub auth: AuthPaths,
}

fn env_var_name(key: &str) -> String {
    format!("{ENV_PREFIX}_{}", key.to_uppercase())
}

fn environment(vars: Option<config::Map<String, String>>) -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .source(vars)
}

fn config_error(err: config::ConfigError) -> ApplicationError {
    ApplicationError::Configuration(err.to_string())
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_service_url(key: &str, value: &str) -> Result<Url, ApplicationError> {
    let url = Url::parse(value).map_err(|e| {
        ApplicationError::Configuration(format!("{} is not a valid URL: {e}", env_var_name(key)))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApplicationError::Configuration(format!(
            "{} must be an http or https URL",
            env_var_name(key)
        )));
    }

    Ok(url)
}

impl AppConfig {
    /// Load configuration from `gigbook.toml` (if present) and the process environment
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if a required value is missing or invalid.
    pub fn load() -> Result<Self, ApplicationError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(environment(None));

        let config = Self::from_builder(builder)?;
        info!(
            backend_url = %config.backend_url,
            auth_url = %config.auth_url,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Build configuration from explicit `GIGBOOK_*` variables only
    ///
    /// Neither the configuration file nor the process environment is read.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if a required value is missing or invalid.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ApplicationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self::from_builder(config::Config::builder().add_source(environment(Some(vars))))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ApplicationError> {
        let raw: RawAppConfig = builder
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawAppConfig) -> Result<Self, ApplicationError> {
        let backend_url = present(raw.backend_url);
        let auth_url = present(raw.auth_url);
        let page_url = present(raw.page_url);
        let oauth_client_id = present(raw.oauth_client_id);
        let maps_api_key = raw
            .maps_api_key
            .filter(|key| !key.expose_secret().trim().is_empty());

        let missing: Vec<String> = [
            ("backend_url", backend_url.is_none()),
            ("auth_url", auth_url.is_none()),
            ("page_url", page_url.is_none()),
            ("oauth_client_id", oauth_client_id.is_none()),
            ("maps_api_key", maps_api_key.is_none()),
        ]
        .into_iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(key, _)| env_var_name(key))
        .collect();

        let (
            Some(backend_url),
            Some(auth_url),
            Some(page_url),
            Some(oauth_client_id),
            Some(maps_api_key),
        ) = (backend_url, auth_url, page_url, oauth_client_id, maps_api_key)
        else {
            return Err(ApplicationError::Configuration(format!(
                "Missing required configuration: {}",
                missing.join(", ")
            )));
        };

        let config = Self {
            backend_url: parse_service_url("backend_url", &backend_url)?,
            auth_url: parse_service_url("auth_url", &auth_url)?,
            page_url: parse_service_url("page_url", &page_url)?,
            oauth_client_id,
            maps_api_key,
            http: raw.http,
            storage: raw.storage,
            telemetry: raw.telemetry,
            auth: raw.auth,
        };
        config.validate()?;

        debug!(storage_dir = %config.storage.directory.display(), "Configuration validated");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.http.timeout_secs == 0 || self.http.connect_timeout_secs == 0 {
            return Err(ApplicationError::Configuration(
                "http timeouts must be greater than zero".to_string(),
            ));
        }

        let slot = format!("{ACCESS_TOKEN_SLOT_PREFIX}{}", self.storage.session_namespace);
        if self.storage.session_namespace.is_empty() || !is_valid_slot_name(&slot) {
            return Err(ApplicationError::Configuration(format!(
                "storage.session_namespace '{}' may only contain letters, digits, '_' and '-'",
                self.storage.session_namespace
            )));
        }

        for (name, path) in [
            ("login", &self.auth.login),
            ("refresh", &self.auth.refresh),
            ("logout", &self.auth.logout),
        ] {
            if !path.starts_with('/') {
                return Err(ApplicationError::Configuration(format!(
                    "auth.{name} path must start with '/', got '{path}'"
                )));
            }
        }

        Ok(())
    }

    /// Maps API key handed to the map widget
    pub fn maps_api_key(&self) -> &SecretString {
        &self.maps_api_key
    }

    fn http_config(&self, base_url: &Url) -> BackendConfig {
        BackendConfig {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            timeout_secs: self.http.timeout_secs,
            connect_timeout_secs: self.http.connect_timeout_secs,
            user_agent: self.http.user_agent.clone(),
        }
    }

    /// Client settings for the marketplace backend
    #[must_use]
    pub fn backend_config(&self) -> BackendConfig {
        self.http_config(&self.backend_url)
    }

    /// Client settings for the auth service
    #[must_use]
    pub fn auth_service_config(&self) -> BackendConfig {
        self.http_config(&self.auth_url)
    }
}
