//! Cross-cutting error types for Quadrant.
//!
//! Transport and backend failures are `quadrant-client` concerns and live in
//! that crate. This module only covers checks that run before any request.

use thiserror::Error;

/// Errors raised by the shared wire-type helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A form field failed validation.
    #[error("{field}: {reason}")]
    Validation { field: String, reason: String },
}

impl CoreError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
