use anyhow::{Context, bail};
use quadrant_config::QuadrantConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<QuadrantConfig> {
    let config =
        QuadrantConfig::load_with_dotenv().context("failed to load quadrant configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(
    mut config: QuadrantConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<QuadrantConfig> {
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
    }
    if let Some(secs) = flags.timeout {
        if secs == 0 {
            bail!("--timeout must be greater than zero");
        }
        config.api.timeout_secs = Some(secs);
    }
    Ok(config)
}
