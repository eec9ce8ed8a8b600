use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `qdr` binary.
#[derive(Debug, Parser)]
#[command(name = "qdr", version, about = "Quadrant - sales agent from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend address (overrides api.base_url)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (overrides api.timeout_secs)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
    }
}
