//! Booking requests between organizers and bands
//!
//! State transitions are decided by the backend; the client only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BandId, BookingId, EventTypeId, UserId};

/// Lifecycle state of a booking as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Waiting for the band to respond
    Pending,
    /// Band accepted the request
    Accepted,
    /// Band declined the request
    Rejected,
    /// Withdrawn by either side
    Cancelled,
    /// Contract signed by both parties
    Signed,
    /// Invoice settled
    Paid,
    /// Status not known to this client version
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// No further transitions are expected
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Rejected | Self::Cancelled | Self::Paid)
    }
}

/// A booking of a band for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier
    pub id: BookingId,
    /// Booked band
    pub band_id: BandId,
    /// Organizer who requested the booking
    pub organizer_id: UserId,
    /// Event title
    pub event_name: String,
    /// Kind of event
    #[serde(default)]
    pub event_type_id: Option<EventTypeId>,
    /// Event start
    pub event_date: DateTime<Utc>,
    /// Venue or address
    #[serde(default)]
    pub location: Option<String>,
    /// Current state
    pub status: BookingStatus,
    /// Agreed fee, once known
    #[serde(default)]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_booking() {
        let body = r#"{
            "id": "bk1",
            "bandId": "b1",
            "organizerId": "u9",
            "eventName": "Summer Wedding",
            "eventDate": "2025-07-12T18:00:00Z",
            "status": "accepted",
            "price": 1500.0
        }"#;
        let booking: Booking = serde_json::from_str(body).unwrap();
        assert_eq!(booking.status, BookingStatus::Accepted);
        assert_eq!(booking.price, Some(1500.0));
        assert!(booking.location.is_none());
    }

    #[test]
    fn final_states() {
        assert!(BookingStatus::Paid.is_final());
        assert!(BookingStatus::Cancelled.is_final());
        assert!(!BookingStatus::Pending.is_final());
        assert!(!BookingStatus::Unknown.is_final());
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let status: BookingStatus = serde_json::from_str("\"negotiating\"").unwrap();
        assert_eq!(status, BookingStatus::Unknown);
    }
}
