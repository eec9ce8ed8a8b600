use quadrant_core::integrations::catalog;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `qdr integrations`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalog(), flags.format)
}
