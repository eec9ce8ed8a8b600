use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Terminal capabilities resolved once at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    /// Spinner on stderr while requests are in flight.
    pub progress: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    fn detect(flags: &GlobalFlags) -> Self {
        let interactive = !flags.quiet;
        Self {
            table_color: interactive
                && flags.format == OutputFormat::Table
                && std::io::stdout().is_terminal()
                && std::env::var_os("NO_COLOR").is_none(),
            progress: interactive && std::io::stderr().is_terminal(),
            term_width: std::env::var("COLUMNS")
                .ok()
                .and_then(|columns| columns.parse().ok())
                .filter(|columns: &usize| *columns >= 40),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs::detect(flags));
}

/// Plain output until [`init`] runs (unit tests).
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
