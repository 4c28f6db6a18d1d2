//! Port for band profiles and offers

use async_trait::async_trait;
use domain::{Band, BandId, Offer, SessionToken};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the backend's band endpoints
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BandPort: Send + Sync {
    /// List the bands the authenticated user belongs to
    async fn my_bands(&self, token: Option<SessionToken>) -> Result<Vec<Band>, ApplicationError>;

    /// Fetch a band profile
    async fn band(
        &self,
        token: Option<SessionToken>,
        band_id: &BandId,
    ) -> Result<Band, ApplicationError>;

    /// List the offers a band has published
    async fn band_offers(
        &self,
        token: Option<SessionToken>,
        band_id: &BandId,
    ) -> Result<Vec<Offer>, ApplicationError>;
}
