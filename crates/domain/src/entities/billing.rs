//! Contracts and invoices attached to bookings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BookingId, ContractId, InvoiceId};

/// Signature state of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Generated, no signatures yet
    Draft,
    /// Signed by one party
    PartiallySigned,
    /// Signed by both parties
    Signed,
    /// Voided
    Cancelled,
    /// Status not known to this client version
    #[serde(other)]
    Unknown,
}

/// Contract generated for a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Unique contract identifier
    pub id: ContractId,
    /// Booking this contract belongs to
    pub booking_id: BookingId,
    /// Signature state
    pub status: ContractStatus,
    /// Download link for the rendered document
    #[serde(default)]
    pub file_url: Option<String>,
    /// Time the last signature was placed
    #[serde(default)]
    pub signed_at: Option<DateTime<Utc>>,
}

/// Payment state of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment
    Pending,
    /// Settled
    Paid,
    /// Past its due date
    Overdue,
    /// Voided
    Cancelled,
    /// Status not known to this client version
    #[serde(other)]
    Unknown,
}

/// Invoice issued for a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique invoice identifier
    pub id: InvoiceId,
    /// Booking being invoiced
    pub booking_id: BookingId,
    /// Total amount
    pub amount: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Payment state
    pub status: InvoiceStatus,
    /// Issue time
    pub issued_at: DateTime<Utc>,
    /// Payment deadline
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
}
