//! Form checks the dashboard ran before submitting a request.
//!
//! The client itself sends whatever it is given. These helpers are for
//! front ends that collect user input.

use crate::entities::EmailDraft;
use crate::errors::CoreError;

/// Minimum length of the primary search field on the hunt and analysis forms.
pub const MIN_QUERY_LEN: usize = 2;

/// Require `value` to be at least `min` characters after trimming.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming `field` when the value is too short.
pub fn min_len(field: &str, value: &str, min: usize) -> Result<(), CoreError> {
    if value.trim().chars().count() < min {
        return Err(CoreError::validation(
            field,
            format!("must be at least {min} characters"),
        ));
    }
    Ok(())
}

/// Treat blank optional inputs as absent.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl EmailDraft {
    /// Check required fields and the address shape.
    ///
    /// # Errors
    ///
    /// Returns the first failing field as [`CoreError::Validation`].
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("client_name", &self.client_name),
            ("company", &self.company),
            ("email", &self.email),
            ("domain", &self.domain),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::validation(field, "is required"));
            }
        }

        let valid_address = self
            .email
            .split_once('@')
            .is_some_and(|(local, host)| !local.is_empty() && host.contains('.'));
        if !valid_address {
            return Err(CoreError::validation("email", "is not a valid address"));
        }
        Ok(())
    }
}
