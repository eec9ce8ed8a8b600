//! Backend connection settings.

use std::time::Duration;

use quadrant_core::DEFAULT_BASE_URL;
use quadrant_core::enums::ApiVersion;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base address of the sales agent backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Unset leaves the transport default (none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Route layout the backend speaks.
    #[serde(default)]
    pub version: ApiVersion,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            version: ApiVersion::default(),
        }
    }
}

impl ApiConfig {
    /// Configured base address, or the local default when blank.
    #[must_use]
    pub fn base_url(&self) -> &str {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            DEFAULT_BASE_URL
        } else {
            trimmed
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::OutOfRange {
                field: "api.timeout_secs",
                reason: "must be greater than zero (omit it to disable the timeout)",
            });
        }
        Ok(())
    }
}
