use clap::Subcommand;

/// Bookmark commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BookmarkCommands {
    /// Save a simple bookmark.
    Add {
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        summary: String,
        #[arg(long)]
        reason: String,
        /// Defaults to general.added_by.
        #[arg(long)]
        added_by: Option<String>,
    },
    /// List simple bookmarks.
    List {
        #[arg(long)]
        added_by: Option<String>,
    },
    /// Look up the simple bookmark for a company (v1 backends).
    Lookup { company_name: String },
    /// Saved hunt and analysis reports.
    Enhanced {
        #[command(subcommand)]
        action: EnhancedCommands,
    },
}

/// Enhanced bookmark commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EnhancedCommands {
    /// List enhanced bookmarks.
    List {
        #[arg(long)]
        added_by: Option<String>,
        /// hunt or analysis
        #[arg(long)]
        report_type: Option<String>,
    },
    /// Show one enhanced bookmark with its full report.
    Get { id: i64 },
    /// Delete an enhanced bookmark.
    Delete { id: i64 },
    /// Download the report document for a bookmark.
    Download {
        id: i64,
        /// Use the report-type specific route (hunt or analysis).
        #[arg(long)]
        report_type: Option<String>,
        /// Output file. Defaults to the backend's name inside general.download_dir.
        #[arg(short, long)]
        output: Option<String>,
    },
}
