//! Application layer - Use cases and orchestration
//!
//! Contains the authenticated request gateway, the ports through which the
//! client reaches the backend and local storage, and the per-feature services
//! that route every backend call through the gateway.

pub mod error;
pub mod ports;
pub mod services;
#[cfg(test)]
pub(crate) mod testing;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
