//! Outbound email.

use quadrant_core::entities::{Acknowledgement, EmailDraft, GeneratedEmail};
use reqwest::Method;

use crate::routes::Endpoint;
use crate::{ClientError, RequestOptions, ServiceClient};

impl ServiceClient {
    /// Send an outreach email. The draft is forwarded as-is; validate it with
    /// [`EmailDraft::validate`] first if it came from user input.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn send_email(&self, draft: &EmailDraft) -> Result<Acknowledgement, ClientError> {
        let path = self.route(Endpoint::SendEmail)?;
        tracing::info!(company = %draft.company, "sending email");
        self.request(&path, RequestOptions::json(Method::POST, draft)?)
            .await
    }

    /// Have the backend draft an email without sending it. `v1` only.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unsupported`] on `v2`; otherwise see
    /// [`ServiceClient::request`].
    pub async fn generate_email(&self, draft: &EmailDraft) -> Result<GeneratedEmail, ClientError> {
        let path = self.route(Endpoint::GenerateEmail)?;
        self.request(&path, RequestOptions::json(Method::POST, draft)?)
            .await
    }
}
