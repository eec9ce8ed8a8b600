//! Errors raised while loading settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read, or its contents do not fit the settings
    /// shape (unknown API version, non-numeric timeout).
    #[error("failed to load quadrant settings: {0}")]
    Load(#[from] figment::Error),

    /// A value parsed but is outside the accepted range.
    #[error("{field} {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}
