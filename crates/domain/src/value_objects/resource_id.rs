//! Identifiers for backend resources
//!
//! Ids are opaque to the client. They are interpolated into request paths, so
//! construction rejects anything that would change the path structure. The
//! backend may serialize ids as strings or integers; both deserialize into
//! the same textual form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Wire representation accepted when deserializing an id
#[doc(hidden)]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Whether a value can be used verbatim as a single URL path segment
fn is_path_segment(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
}

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "RawId", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a ", $kind, " id, rejecting values that are not a single path segment")]
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if is_path_segment(&value) {
                    Ok(Self(value))
                } else {
                    Err(DomainError::invalid_identifier($kind, value))
                }
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = DomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<RawId> for $name {
            type Error = DomainError;

            fn try_from(raw: RawId) -> Result<Self, Self::Error> {
                Self::new(String::from(raw))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

resource_id!(
    /// Identifier of a marketplace user
    UserId,
    "user"
);
resource_id!(
    /// Identifier of a band
    BandId,
    "band"
);
resource_id!(
    /// Identifier of a booking
    BookingId,
    "booking"
);
resource_id!(
    /// Identifier of a chat between a band and an organizer
    ChatId,
    "chat"
);
resource_id!(
    /// Identifier of a single chat message
    MessageId,
    "message"
);
resource_id!(
    /// Identifier of a notification
    NotificationId,
    "notification"
);
resource_id!(
    /// Identifier of a band invitation
    InvitationId,
    "invitation"
);
resource_id!(
    /// Identifier of a band offer
    OfferId,
    "offer"
);
resource_id!(
    /// Identifier of a booking contract
    ContractId,
    "contract"
);
resource_id!(
    /// Identifier of an invoice
    InvoiceId,
    "invoice"
);
resource_id!(
    /// Identifier of an event type in the catalog
    EventTypeId,
    "event type"
);
resource_id!(
    /// Identifier of a musical style in the catalog
    MusicalStyleId,
    "musical style"
);
