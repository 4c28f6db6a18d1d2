//! Application services - Use case implementations
//!
//! Feature services route every backend call through the shared
//! [`SessionGateway`]; none of them retries on its own.

mod account_service;
mod band_service;
mod booking_service;
mod catalog_service;
mod chat_service;
mod invitation_service;
mod notification_service;
mod session_gateway;
mod session_service;

pub use account_service::AccountService;
pub use band_service::BandService;
pub use booking_service::BookingService;
pub use catalog_service::CatalogService;
pub use chat_service::ChatService;
pub use invitation_service::InvitationService;
pub use notification_service::NotificationService;
pub use session_gateway::SessionGateway;
pub use session_service::SessionService;
