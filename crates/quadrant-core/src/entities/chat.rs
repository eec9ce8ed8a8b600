use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChatRole;

const NO_RESPONSE: &str = "No response";

/// Body of `POST /projects/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub question: String,
}

/// Body of `POST /projects/chat/enhanced`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnhancedChatRequest {
    pub company_name: String,
    pub question: String,
}

/// Body of the v1 `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LegacyChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Answer from either chat endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
}

impl ChatReply {
    /// The assistant's text, or `"No response"` when the backend sent none.
    #[must_use]
    pub fn text(&self) -> &str {
        self.response
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_RESPONSE)
    }
}

/// One message of a conversation. Held in transient UI state only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
