//! # quadrant-config
//!
//! Layered configuration loading for the Quadrant client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUADRANT_*` prefix, `__` as separator)
//! 2. Project-level `.quadrant/config.toml`
//! 3. User-level `~/.config/quadrant/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUADRANT_API__BASE_URL` -> `api.base_url`,
//! `QUADRANT_GENERAL__ADDED_BY` -> `general.added_by`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use quadrant_config::QuadrantConfig;
//!
//! let config = QuadrantConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuadrantConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl QuadrantConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".quadrant/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("QUADRANT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quadrant").join("config.toml"))
    }
}
