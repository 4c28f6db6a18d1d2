//! Backend adapter - Implements the feature ports using integration_backend

use application::error::ApplicationError;
use application::ports::{
    AccountPort, BandPort, BookingPort, CatalogPort, ChatPort, InvitationPort, NotificationPort,
};
use async_trait::async_trait;
use domain::{
    Band, BandId, Booking, BookingId, Chat, ChatId, ChatMessage, Contract, EmailAddress,
    EventType, Invitation, InvitationId, Invoice, InvoiceId, MusicalStyle, Notification,
    NotificationId, Offer, SessionToken, User,
};
use integration_backend::{BackendClient, BackendClientError, BackendConfig};

/// Translate a client error into the application taxonomy
///
/// Backend error bodies pass through unchanged.
pub(crate) fn map_client_error(err: BackendClientError) -> ApplicationError {
    match err {
        BackendClientError::Connection(_) | BackendClientError::Timeout { .. } => {
            ApplicationError::Transport(err.to_string())
        },
        BackendClientError::Backend(body) => ApplicationError::Backend(body),
        BackendClientError::Parse(msg) => ApplicationError::InvalidResponse(msg),
        BackendClientError::Configuration(msg) => ApplicationError::Configuration(msg),
    }
}

/// Adapter exposing the marketplace backend through the application ports
#[derive(Debug, Clone)]
pub struct BackendAdapter {
    client: BackendClient,
}

impl BackendAdapter {
    /// Create an adapter from backend configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, ApplicationError> {
        let client = BackendClient::new(config).map_err(map_client_error)?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn with_client(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatPort for BackendAdapter {
    async fn band_chats(
        &self,
        token: Option<SessionToken>,
        band_id: &BandId,
    ) -> Result<Vec<Chat>, ApplicationError> {
        self.client
            .band_chats(token.as_ref(), band_id)
            .await
            .map_err(map_client_error)
    }

    async fn chat_history(
        &self,
        token: Option<SessionToken>,
        chat_id: &ChatId,
    ) -> Result<Vec<ChatMessage>, ApplicationError> {
        self.client
            .chat_history(token.as_ref(), chat_id)
            .await
            .map_err(map_client_error)
    }
}

#[async_trait]
impl CatalogPort for BackendAdapter {
    async fn event_types(
        &self,
        token: Option<SessionToken>,
    ) -> Result<Vec<EventType>, ApplicationError> {
        self.client
            .event_types(token.as_ref())
            .await
            .map_err(map_client_error)
    }

    async fn musical_styles(
        &self,
        token: Option<SessionToken>,
    ) -> Result<Vec<MusicalStyle>, ApplicationError> {
        self.client
            .musical_styles(token.as_ref())
            .await
            .map_err(map_client_error)
    }
}

#[async_trait]
impl NotificationPort for BackendAdapter {
    async fn user_notifications(
        &self,
        token: Option<SessionToken>,
    ) -> Result<Vec<Notification>, ApplicationError> {
        self.client
            .user_notifications(token.as_ref())
            .await
            .map_err(map_client_error)
    }

    async fn mark_read(
        &self,
        token: Option<SessionToken>,
        notification_id: &NotificationId,
    ) -> Result<(), ApplicationError> {
        self.client
            .mark_notification_read(token.as_ref(), notification_id)
            .await
            .map_err(map_client_error)
    }
}

#[async_trait]
impl AccountPort for BackendAdapter {
    async fn current_user(&self, token: Option<SessionToken>) -> Result<User, ApplicationError> {
        self.client
            .current_user(token.as_ref())
            .await
            .map_err(map_client_error)
    }

    async fn verify_email(
        &self,
        token: Option<SessionToken>,
        verification_token: &str,
    ) -> Result<(), ApplicationError> {
        self.client
            .verify_email(token.as_ref(), verification_token)
            .await
            .map_err(map_client_error)
    }

    async fn resend_verification(
        &self,
        token: Option<SessionToken>,
        email: &EmailAddress,
    ) -> Result<(), ApplicationError> {
        self.client
            .resend_verification(token.as_ref(), email)
            .await
            .map_err(map_client_error)
    }
}

#[async_trait]
impl BandPort for BackendAdapter {
    async fn my_bands(&self, token: Option<SessionToken>) -> Result<Vec<Band>, ApplicationError> {
        self.client
            .my_bands(token.as_ref())
            .await
            .map_err(map_client_error)
    }

    async fn band(
        &self,
        token: Option<SessionToken>,
        band_id: &BandId,
    ) -> Result<Band, ApplicationError> {
        self.client
            .band(token.as_ref(), band_id)
            .await
            .map_err(map_client_error)
    }

    async fn band_offers(
        &self,
        token: Option<SessionToken>,
        band_id: &BandId,
    ) -> Result<Vec<Offer>, ApplicationError> {
        self.client
            .band_offers(token.as_ref(), band_id)
            .await
            .map_err(map_client_error)
    }
}

#[async_trait]
impl BookingPort for BackendAdapter {
    async fn band_bookings(
        &self,
        token: Option<SessionToken>,
        band_id: &BandId,
    ) -> Result<Vec<Booking>, ApplicationError> {
        self.client
            .band_bookings(token.as_ref(), band_id)
            .await
            .map_err(map_client_error)
    }

    async fn booking(
        &self,
        token: Option<SessionToken>,
        booking_id: &BookingId,
    ) -> Result<Booking, ApplicationError> {
        self.client
            .booking(token.as_ref(), booking_id)
            .await
            .map_err(map_client_error)
    }

    async fn booking_contract(
        &self,
        token: Option<SessionToken>,
        booking_id: &BookingId,
    ) -> Result<Contract, ApplicationError> {
        self.client
            .booking_contract(token.as_ref(), booking_id)
            .await
            .map_err(map_client_error)
    }

    async fn invoice(
        &self,
        token: Option<SessionToken>,
        invoice_id: &InvoiceId,
    ) -> Result<Invoice, ApplicationError> {
        self.client
            .invoice(token.as_ref(), invoice_id)
            .await
            .map_err(map_client_error)
    }
}

#[async_trait]
impl InvitationPort for BackendAdapter {
    async fn user_invitations(
        &self,
        token: Option<SessionToken>,
    ) -> Result<Vec<Invitation>, ApplicationError> {
        self.client
            .user_invitations(token.as_ref())
            .await
            .map_err(map_client_error)
    }

    async fn accept(
        &self,
        token: Option<SessionToken>,
        invitation_id: &InvitationId,
    ) -> Result<Invitation, ApplicationError> {
        self.client
            .accept_invitation(token.as_ref(), invitation_id)
            .await
            .map_err(map_client_error)
    }

    async fn decline(
        &self,
        token: Option<SessionToken>,
        invitation_id: &InvitationId,
    ) -> Result<Invitation, ApplicationError> {
        self.client
            .decline_invitation(token.as_ref(), invitation_id)
            .await
            .map_err(map_client_error)
    }
}
