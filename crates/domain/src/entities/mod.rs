//! Domain entities - Data shapes exchanged with the marketplace backend

mod backend_error;
mod band;
mod billing;
mod booking;
mod catalog;
mod chat;
mod invitation;
mod notification;
mod user;

pub use backend_error::BackendError;
pub use band::{Band, BandMember, BandRole, Offer};
pub use billing::{Contract, ContractStatus, Invoice, InvoiceStatus};
pub use booking::{Booking, BookingStatus};
pub use catalog::{EventType, MusicalStyle};
pub use chat::{Chat, ChatMessage};
pub use invitation::{Invitation, InvitationStatus};
pub use notification::{Notification, NotificationKind, unread_count};
pub use user::{User, UserRole};
