//! Domain layer for the Gigbook client
//!
//! Contains the data shapes exchanged with the marketplace backend, the value
//! objects used to address them, and domain errors. Booking, payment and
//! contract logic live in the backend; entities here carry no behavior beyond
//! small convenience accessors.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
