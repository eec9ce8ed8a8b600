use quadrant_core::entities::EmailDraft;
use quadrant_core::validation::non_blank;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{EmailArgs, EmailCommands};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `qdr email`.
pub async fn handle(
    action: &EmailCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EmailCommands::Send(args) => {
            let draft = draft_from(args)?;
            let ack = with_spinner("Sending email", ctx.client.send_email(&draft)).await?;
            output(&ack, flags.format)
        }
        EmailCommands::Generate(args) => {
            let draft = draft_from(args)?;
            let generated =
                with_spinner("Drafting email", ctx.client.generate_email(&draft)).await?;
            output(&generated, flags.format)
        }
    }
}

fn draft_from(args: &EmailArgs) -> anyhow::Result<EmailDraft> {
    let draft = EmailDraft {
        client_name: args.client_name.trim().to_string(),
        company: args.company.trim().to_string(),
        email: args.email.trim().to_string(),
        domain: args.domain.trim().to_string(),
        lead_context: non_blank(args.lead_context.as_deref()),
    };
    draft.validate()?;
    Ok(draft)
}
