use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Hunt(args) => commands::hunt::handle(&args, ctx, flags).await,
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags).await,
        Commands::Email { action } => commands::email::handle(&action, ctx, flags).await,
        Commands::Bookmark { action } => commands::bookmark::handle(&action, ctx, flags).await,
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags).await,
        Commands::Integrations | Commands::Schema(_) => {
            unreachable!("integrations/schema are pre-dispatched in main")
        }
    }
}
