//! Value Objects - Immutable, identity-less domain primitives

mod email_address;
mod resource_id;
mod session_token;

pub use email_address::EmailAddress;
pub use resource_id::{
    BandId, BookingId, ChatId, ContractId, EventTypeId, InvitationId, InvoiceId, MessageId,
    MusicalStyleId, NotificationId, OfferId, UserId,
};
pub use session_token::SessionToken;
