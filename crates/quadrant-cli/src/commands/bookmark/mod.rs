mod enhanced;

use quadrant_core::entities::Bookmark;
use quadrant_core::validation::non_blank;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BookmarkCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `qdr bookmark`.
pub async fn handle(
    action: &BookmarkCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BookmarkCommands::Add {
            company_name,
            summary,
            reason,
            added_by,
        } => {
            let bookmark = Bookmark {
                id: None,
                company_name: company_name.trim().to_string(),
                analysis_summary: summary.clone(),
                added_by: non_blank(added_by.as_deref())
                    .unwrap_or_else(|| ctx.added_by().to_string()),
                reason: reason.clone(),
            };
            let ack = with_spinner("Saving bookmark", ctx.client.add_bookmark(&bookmark)).await?;
            output(&ack, flags.format)
        }
        BookmarkCommands::List { added_by } => {
            let added_by = non_blank(added_by.as_deref());
            let bookmarks = with_spinner(
                "Loading bookmarks",
                ctx.client.get_bookmarks(added_by.as_deref()),
            )
            .await?;
            output(&bookmarks, flags.format)
        }
        BookmarkCommands::Lookup { company_name } => {
            let bookmark = with_spinner(
                "Looking up bookmark",
                ctx.client.get_bookmark_by_company(company_name.trim()),
            )
            .await?;
            output(&bookmark, flags.format)
        }
        BookmarkCommands::Enhanced { action } => enhanced::handle(action, ctx, flags).await,
    }
}
