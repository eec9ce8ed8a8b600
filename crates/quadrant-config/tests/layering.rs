//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and environment variables.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use quadrant_config::{ConfigError, QuadrantConfig};
use quadrant_core::enums::ApiVersion;

fn figment_with_file(path: &str) -> Figment {
    Figment::from(Serialized::defaults(QuadrantConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("QUADRANT_").split("__"))
}

#[test]
fn loads_api_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://agent.example.com"
timeout_secs = 45
version = "v1"
"#,
        )?;

        let config = QuadrantConfig::from_figment(&figment_with_file("config.toml"))
            .expect("config loads");
        assert_eq!(config.api.base_url(), "https://agent.example.com");
        assert_eq!(config.api.timeout_secs, Some(45));
        assert_eq!(config.api.version, ApiVersion::V1);
        assert_eq!(config.general.added_by, "Sales Rep");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://from-toml.example.com"

[general]
added_by = "Toml Rep"
"#,
        )?;
        jail.set_env("QUADRANT_API__BASE_URL", "http://10.0.0.5:8000");
        jail.set_env("QUADRANT_GENERAL__ADDED_BY", "Jordan");

        let config = QuadrantConfig::from_figment(&figment_with_file("config.toml"))
            .expect("config loads");
        assert_eq!(config.api.base_url(), "http://10.0.0.5:8000");
        assert_eq!(config.general.added_by, "Jordan");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".quadrant")?;
        jail.create_file(
            ".quadrant/config.toml",
            r#"
[general]
download_dir = "reports"
"#,
        )?;

        let config = QuadrantConfig::load().expect("config loads");
        assert_eq!(config.general.download_dir.as_deref(), Some("reports"));
        Ok(())
    });
}

#[test]
fn zero_timeout_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("QUADRANT_API__TIMEOUT_SECS", "0");

        let err = QuadrantConfig::load().expect_err("zero timeout should fail");
        assert!(matches!(err, ConfigError::OutOfRange { field: "api.timeout_secs", .. }));
        Ok(())
    });
}

#[test]
fn unknown_version_fails_to_load() {
    Jail::expect_with(|jail| {
        jail.set_env("QUADRANT_API__VERSION", "v9");

        let err = QuadrantConfig::load().expect_err("unknown version should fail");
        assert!(matches!(err, ConfigError::Load(_)));
        Ok(())
    });
}
