//! Company chat.

use quadrant_core::enums::ApiVersion;
use quadrant_core::entities::{ChatReply, ChatRequest, EnhancedChatRequest, LegacyChatRequest};
use reqwest::Method;

use crate::routes::Endpoint;
use crate::{ClientError, RequestOptions, ServiceClient};

impl ServiceClient {
    /// Ask a question, optionally scoped to a company.
    ///
    /// On `v2` the body is `{company_name?, question}`; on `v1` it is
    /// `{message, context?}`.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn chat(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<ChatReply, ClientError> {
        let path = self.route(Endpoint::Chat)?;
        let options = match self.version() {
            ApiVersion::V2 => RequestOptions::json(
                Method::POST,
                &ChatRequest {
                    company_name: context.map(str::to_string),
                    question: message.to_string(),
                },
            )?,
            ApiVersion::V1 => RequestOptions::json(
                Method::POST,
                &LegacyChatRequest {
                    message: message.to_string(),
                    context: context.map(str::to_string),
                },
            )?,
        };
        self.request(&path, options).await
    }

    /// Ask a question about `company_name` using its stored reports.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unsupported`] on `v1`; otherwise see
    /// [`ServiceClient::request`].
    pub async fn chat_enhanced(
        &self,
        company_name: &str,
        question: &str,
    ) -> Result<ChatReply, ClientError> {
        let path = self.route(Endpoint::ChatEnhanced)?;
        let body = EnhancedChatRequest {
            company_name: company_name.to_string(),
            question: question.to_string(),
        };
        self.request(&path, RequestOptions::json(Method::POST, &body)?)
            .await
    }
}
