//! Band accessors: memberships, profiles and offers

use std::sync::Arc;

use domain::{Band, BandId, Offer};
use tracing::instrument;

use super::SessionGateway;
use crate::error::ApplicationError;
use crate::ports::BandPort;

/// Read access to bands and their offers
pub struct BandService {
    gateway: Arc<SessionGateway>,
    port: Arc<dyn BandPort>,
}

impl std::fmt::Debug for BandService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BandService").finish_non_exhaustive()
    }
}

impl BandService {
    /// Create a new band service
    #[must_use]
    pub fn new(gateway: Arc<SessionGateway>, port: Arc<dyn BandPort>) -> Self {
        Self { gateway, port }
    }

    /// Bands the user is a member of
    #[instrument(skip(self))]
    pub async fn my_bands(&self) -> Result<Vec<Band>, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.my_bands(token))
            .await
    }

    #[instrument(skip(self))]
    pub async fn band(&self, band_id: &BandId) -> Result<Band, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.band(token, band_id))
            .await
    }

    /// Offers a band has published
    ///
    /// An empty list means the band has no offers; failures are errors.
    #[instrument(skip(self))]
    pub async fn band_offers(&self, band_id: &BandId) -> Result<Vec<Offer>, ApplicationError> {
        self.gateway
            .execute_with_refresh(|token| self.port.band_offers(token, band_id))
            .await
    }
}
