//! Port for bookings and their contracts and invoices

use async_trait::async_trait;
use domain::{BandId, Booking, BookingId, Contract, Invoice, InvoiceId, SessionToken};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the backend's booking, contract and invoice endpoints
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookingPort: Send + Sync {
    /// List bookings of a band
    async fn band_bookings(
        &self,
        token: Option<SessionToken>,
        band_id: &BandId,
    ) -> Result<Vec<Booking>, ApplicationError>;

    /// Fetch a booking
    async fn booking(
        &self,
        token: Option<SessionToken>,
        booking_id: &BookingId,
    ) -> Result<Booking, ApplicationError>;

    /// Fetch the contract generated for a booking
    async fn booking_contract(
        &self,
        token: Option<SessionToken>,
        booking_id: &BookingId,
    ) -> Result<Contract, ApplicationError>;

    /// Fetch an invoice
    async fn invoice(
        &self,
        token: Option<SessionToken>,
        invoice_id: &InvoiceId,
    ) -> Result<Invoice, ApplicationError>;
}
