//! Client error types.
//!
//! Every failure reaches the caller as one [`ClientError`] whose `Display`
//! output is the human-readable message a front end shows.

use quadrant_core::enums::ApiVersion;
use thiserror::Error;

/// Errors that can occur when talking to the sales agent backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, DNS or TLS failure before a response arrived.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    ///
    /// `message` is the backend's `detail` when it sent one.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Backend detail, or a generic message.
        message: String,
    },

    /// A success response whose body is not JSON.
    #[error("Invalid JSON response: {0}")]
    Parse(String),

    /// A JSON body that does not match the declared result type.
    #[error("Unexpected response shape (expected {expected}): {reason}")]
    Schema {
        /// Rust type the body was checked against.
        expected: &'static str,
        /// Deserializer diagnostic.
        reason: String,
    },

    /// A document download answered with a non-success status.
    ///
    /// The message is fixed; the backend's body is not surfaced.
    #[error("Download failed")]
    Download {
        /// HTTP status code returned by the backend.
        status: u16,
    },

    /// The configured per-request timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The client's cancellation token fired while the request was in flight.
    #[error("Request cancelled")]
    Cancelled,

    /// The selected API version has no route for this operation.
    #[error("'{operation}' is not available in the {version} API")]
    Unsupported {
        operation: &'static str,
        version: ApiVersion,
    },

    /// The configured base address is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ClientError {
    /// HTTP status code, for errors that carry one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Download { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(error)
        }
    }
}
