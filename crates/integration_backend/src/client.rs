//! Marketplace REST API client
//!
//! One method per endpoint. Each method performs exactly one HTTP call with
//! the credential it is given; session refresh is the caller's concern.

use domain::{
    Band, BandId, Booking, BookingId, Chat, ChatId, ChatMessage, Contract, EmailAddress,
    EventType, Invitation, InvitationId, Invoice, InvoiceId, MusicalStyle, Notification,
    NotificationId, Offer, SessionToken, User,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::BackendConfig;
use crate::error::BackendClientError;
use crate::transport::HttpTransport;

#[derive(Serialize)]
struct VerifyEmailRequest<'a> {
    token: &'a str,
}

#[derive(Serialize)]
struct ResendVerificationRequest<'a> {
    email: &'a str,
}

/// HTTP client for the marketplace backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: HttpTransport,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendClientError> {
        Ok(Self {
            http: HttpTransport::new(config)?,
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        token: Option<&SessionToken>,
        path: &str,
    ) -> Result<T, BackendClientError> {
        debug!(path, "GET");
        let request = self.http.request(Method::GET, path, token);
        self.http.send_json(request, path).await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        token: Option<&SessionToken>,
        path: &str,
    ) -> Result<T, BackendClientError> {
        debug!(path, "PUT");
        let request = self.http.request(Method::PUT, path, token);
        self.http.send_json(request, path).await
    }

    async fn post_ignoring_body<B: Serialize + ?Sized>(
        &self,
        token: Option<&SessionToken>,
        path: &str,
        body: &B,
    ) -> Result<(), BackendClientError> {
        debug!(path, "POST");
        let request = self.http.request(Method::POST, path, token).json(body);
        self.http.send_empty(request, path).await
    }

    // ---- Chat ----

    /// `GET /chat/band/{bandId}`
    #[instrument(skip(self, token))]
    pub async fn band_chats(
        &self,
        token: Option<&SessionToken>,
        band_id: &BandId,
    ) -> Result<Vec<Chat>, BackendClientError> {
        self.get(token, &format!("/chat/band/{band_id}")).await
    }

    /// `GET /chat/{chatId}/history`
    #[instrument(skip(self, token))]
    pub async fn chat_history(
        &self,
        token: Option<&SessionToken>,
        chat_id: &ChatId,
    ) -> Result<Vec<ChatMessage>, BackendClientError> {
        self.get(token, &format!("/chat/{chat_id}/history")).await
    }

    // ---- Catalog ----

    /// `GET /event-types`
    #[instrument(skip(self, token))]
    pub async fn event_types(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Vec<EventType>, BackendClientError> {
        self.get(token, "/event-types").await
    }

    /// `GET /musical-styles`
    #[instrument(skip(self, token))]
    pub async fn musical_styles(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Vec<MusicalStyle>, BackendClientError> {
        self.get(token, "/musical-styles").await
    }

    // ---- Notifications ----

    /// `GET /notifications/user`
    #[instrument(skip(self, token))]
    pub async fn user_notifications(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Vec<Notification>, BackendClientError> {
        self.get(token, "/notifications/user").await
    }

    /// `PUT /notifications/{id}/read`; the response body is ignored
    #[instrument(skip(self, token))]
    pub async fn mark_notification_read(
        &self,
        token: Option<&SessionToken>,
        notification_id: &NotificationId,
    ) -> Result<(), BackendClientError> {
        let path = format!("/notifications/{notification_id}/read");
        debug!(path, "PUT");
        let request = self.http.request(Method::PUT, &path, token);
        self.http.send_empty(request, &path).await
    }

    // ---- Account ----

    /// `GET /users/me`
    #[instrument(skip(self, token))]
    pub async fn current_user(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<User, BackendClientError> {
        self.get(token, "/users/me").await
    }

    /// `POST /email/verify` with `{token}`
    #[instrument(skip(self, token, verification_token))]
    pub async fn verify_email(
        &self,
        token: Option<&SessionToken>,
        verification_token: &str,
    ) -> Result<(), BackendClientError> {
        let body = VerifyEmailRequest {
            token: verification_token,
        };
        self.post_ignoring_body(token, "/email/verify", &body).await
    }

    /// `POST /email/resend` with `{email}`
    #[instrument(skip(self, token), fields(email = %email))]
    pub async fn resend_verification(
        &self,
        token: Option<&SessionToken>,
        email: &EmailAddress,
    ) -> Result<(), BackendClientError> {
        let body = ResendVerificationRequest {
            email: email.as_str(),
        };
        self.post_ignoring_body(token, "/email/resend", &body).await
    }

    // ---- Bands ----

    /// `GET /bands/user`
    #[instrument(skip(self, token))]
    pub async fn my_bands(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Vec<Band>, BackendClientError> {
        self.get(token, "/bands/user").await
    }

    /// `GET /bands/{bandId}`
    #[instrument(skip(self, token))]
    pub async fn band(
        &self,
        token: Option<&SessionToken>,
        band_id: &BandId,
    ) -> Result<Band, BackendClientError> {
        self.get(token, &format!("/bands/{band_id}")).await
    }

    /// `GET /offers/band/{bandId}`
    #[instrument(skip(self, token))]
    pub async fn band_offers(
        &self,
        token: Option<&SessionToken>,
        band_id: &BandId,
    ) -> Result<Vec<Offer>, BackendClientError> {
        self.get(token, &format!("/offers/band/{band_id}")).await
    }

    // ---- Bookings ----

    /// `GET /bookings/band/{bandId}`
    #[instrument(skip(self, token))]
    pub async fn band_bookings(
        &self,
        token: Option<&SessionToken>,
        band_id: &BandId,
    ) -> Result<Vec<Booking>, BackendClientError> {
        self.get(token, &format!("/bookings/band/{band_id}")).await
    }

    /// `GET /bookings/{bookingId}`
    #[instrument(skip(self, token))]
    pub async fn booking(
        &self,
        token: Option<&SessionToken>,
        booking_id: &BookingId,
    ) -> Result<Booking, BackendClientError> {
        self.get(token, &format!("/bookings/{booking_id}")).await
    }

    /// `GET /contracts/booking/{bookingId}`
    #[instrument(skip(self, token))]
    pub async fn booking_contract(
        &self,
        token: Option<&SessionToken>,
        booking_id: &BookingId,
    ) -> Result<Contract, BackendClientError> {
        self.get(token, &format!("/contracts/booking/{booking_id}"))
            .await
    }

    /// `GET /invoices/{invoiceId}`
    #[instrument(skip(self, token))]
    pub async fn invoice(
        &self,
        token: Option<&SessionToken>,
        invoice_id: &InvoiceId,
    ) -> Result<Invoice, BackendClientError> {
        self.get(token, &format!("/invoices/{invoice_id}")).await
    }

    // ---- Invitations ----

    /// `GET /invitations/user`
    #[instrument(skip(self, token))]
    pub async fn user_invitations(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Vec<Invitation>, BackendClientError> {
        self.get(token, "/invitations/user").await
    }

    /// `PUT /invitations/{id}/accept`
    #[instrument(skip(self, token))]
    pub async fn accept_invitation(
        &self,
        token: Option<&SessionToken>,
        invitation_id: &InvitationId,
    ) -> Result<Invitation, BackendClientError> {
        self.put(token, &format!("/invitations/{invitation_id}/accept"))
            .await
    }

    /// `PUT /invitations/{id}/decline`
    #[instrument(skip(self, token))]
    pub async fn decline_invitation(
        &self,
        token: Option<&SessionToken>,
        invitation_id: &InvitationId,
    ) -> Result<Invitation, BackendClientError> {
        self.put(token, &format!("/invitations/{invitation_id}/decline"))
            .await
    }
}
