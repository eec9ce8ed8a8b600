use clap::{Args, Subcommand};

use crate::cli::subcommands::{BookmarkCommands, EmailCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Hunt for project opportunities in a domain.
    Hunt(HuntArgs),
    /// Analyze one company's readiness for outreach.
    Analyze(AnalyzeArgs),
    /// Outbound email.
    Email {
        #[command(subcommand)]
        action: EmailCommands,
    },
    /// Simple and enhanced bookmarks.
    Bookmark {
        #[command(subcommand)]
        action: BookmarkCommands,
    },
    /// Ask the sales agent a question.
    Chat(ChatArgs),
    /// List third-party integrations and their status.
    Integrations,
    /// Dump JSON schema for a wire type.
    Schema(SchemaArgs),
}

/// Arguments for `qdr hunt`.
#[derive(Clone, Debug, Args)]
pub struct HuntArgs {
    #[arg(long)]
    pub domain_focus: String,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    /// Save the report as an enhanced bookmark.
    #[arg(long)]
    pub bookmark: bool,
    /// Reason recorded with the bookmark.
    #[arg(long, requires = "bookmark")]
    pub reason: Option<String>,
}

/// Arguments for `qdr analyze`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(long)]
    pub company_name: String,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    /// Save the analysis as an enhanced bookmark.
    #[arg(long)]
    pub bookmark: bool,
    /// Reason recorded with the bookmark.
    #[arg(long, requires = "bookmark")]
    pub reason: Option<String>,
}

/// Arguments for `qdr chat`.
#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Question to ask. Starts an interactive session when omitted.
    pub question: Option<String>,
    /// Scope the conversation to a company.
    #[arg(long)]
    pub company: Option<String>,
    /// Use the company's stored reports (requires --company).
    #[arg(long, requires = "company")]
    pub enhanced: bool,
}

/// Arguments for `qdr schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name. Lists the registered names when omitted.
    pub type_name: Option<String>,
    /// Check a JSON file against the named schema instead of printing it.
    #[arg(long, requires = "type_name")]
    pub validate: Option<String>,
}
