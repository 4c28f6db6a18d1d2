//! Booking accessors, including a booking's contract and invoices

use std::sync::Arc;

use domain::{BandId, Booking, BookingId, Contract, Invoice, InvoiceId};
use tracing::instrument;

use super::SessionGateway;
use crate::error::ApplicationError;
use crate::ports::BookingPort;

/// Read access to bookings and their paperwork
pub struct BookingService {
    gateway: Arc<SessionGateway>,
    port: Arc<dyn BookingPort>,
}

impl std::fmt::Debug for BookingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingService").finish_non_exhaustive()
    }
}

impl BookingService {
    /// Create a new booking service
    #[must_use]
    pub fn new(gateway: Arc<SessionGateway>, port: Arc<dyn BookingPort>) -> Self {
        Self { gateway, port }
    }

    /// Bookings of a band
    #[instrument(skip(self))]
    pub async fn band_bookings(&self, band_id: &BandId) -> Result<Vec<Booking>, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.band_bookings(token, band_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn booking(&self, booking_id: &BookingId) -> Result<Booking, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.booking(token, booking_id))
            .await
    }

    /// Contract attached to a booking
    #[instrument(skip(self))]
    pub async fn booking_contract(
        &self,
        booking_id: &BookingId,
    ) -> Result<Contract, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.booking_contract(token, booking_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn invoice(&self, invoice_id: &InvoiceId) -> Result<Invoice, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.invoice(token, invoice_id))
            .await
    }
}
