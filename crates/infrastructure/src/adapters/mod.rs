//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod auth_adapter;
mod backend_adapter;
mod in_memory_credential_store;

pub use auth_adapter::AuthAdapter;
pub use backend_adapter::BackendAdapter;
pub use in_memory_credential_store::InMemoryCredentialStore;
