//! General application configuration.

use quadrant_core::DEFAULT_ADDED_BY;
use serde::{Deserialize, Serialize};

fn default_added_by() -> String {
    DEFAULT_ADDED_BY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Submitter name attached to new bookmarks.
    #[serde(default = "default_added_by")]
    pub added_by: String,

    /// Directory downloaded report documents are written to.
    #[serde(default)]
    pub download_dir: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            added_by: default_added_by(),
            download_dir: None,
        }
    }
}
