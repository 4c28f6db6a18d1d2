//! Gigbook marketplace HTTP integration
//!
//! Typed `reqwest` clients for the two services the Gigbook client talks to:
//! the marketplace backend ([`BackendClient`]) and the auth service
//! ([`AuthClient`]).
//!
//! Clients perform exactly one HTTP call per method and never retry. Failed
//! responses are reported as [`BackendClientError::Backend`] carrying the
//! backend's `{statusCode, error, path, timestamp}` body unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::BandId;
//! use integration_backend::{BackendClient, BackendConfig};
//!
//! let client = BackendClient::new(&BackendConfig::new("https://api.gigbook.app"))?;
//! let chats = client.band_chats(Some(&token), &BandId::new("b1")?).await?;
//! ```

mod auth;
mod client;
mod config;
mod error;
mod transport;

pub use auth::AuthClient;
pub use client::BackendClient;
pub use config::{AuthPaths, BackendConfig};
pub use error::BackendClientError;
pub use transport::REQUEST_ID_HEADER;
