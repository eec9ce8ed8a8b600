use clap::{Args, Subcommand};

/// Email commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmailCommands {
    /// Send an outreach email.
    Send(EmailArgs),
    /// Draft an email without sending it (v1 backends).
    Generate(EmailArgs),
}

#[derive(Clone, Debug, Args)]
pub struct EmailArgs {
    #[arg(long)]
    pub client_name: String,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub domain: String,
    #[arg(long)]
    pub lead_context: Option<String>,
}
