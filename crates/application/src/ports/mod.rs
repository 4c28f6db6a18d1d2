//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod account_port;
mod auth_port;
mod band_port;
mod booking_port;
mod catalog_port;
mod chat_port;
mod credential_store;
mod draft_store;
mod invitation_port;
mod notification_port;
mod token_refresh_port;

pub use account_port::AccountPort;
#[cfg(test)]
pub use account_port::MockAccountPort;
pub use auth_port::AuthPort;
#[cfg(test)]
pub use auth_port::MockAuthPort;
pub use band_port::BandPort;
#[cfg(test)]
pub use band_port::MockBandPort;
pub use booking_port::BookingPort;
#[cfg(test)]
pub use booking_port::MockBookingPort;
pub use catalog_port::CatalogPort;
#[cfg(test)]
pub use catalog_port::MockCatalogPort;
pub use chat_port::ChatPort;
#[cfg(test)]
pub use chat_port::MockChatPort;
pub use credential_store::CredentialStorePort;
pub use draft_store::{DraftStoreExt, DraftStorePort};
pub use invitation_port::InvitationPort;
#[cfg(test)]
pub use invitation_port::MockInvitationPort;
#[cfg(test)]
pub use notification_port::MockNotificationPort;
pub use notification_port::NotificationPort;
#[cfg(test)]
pub use token_refresh_port::MockTokenRefreshPort;
pub use token_refresh_port::TokenRefreshPort;
