use quadrant_core::entities::{HUNT_BOOKMARK_REASON, HuntQuery, HuntReport};
use quadrant_core::validation::{MIN_QUERY_LEN, min_len, non_blank};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HuntArgs;
use crate::commands::shared::bookmarked::Bookmarked;
use crate::context::AppContext;
use crate::progress::with_spinner;

/// Handle `qdr hunt`.
pub async fn handle(args: &HuntArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    run(args, ctx).await?.finish(flags)
}

async fn run(args: &HuntArgs, ctx: &AppContext) -> anyhow::Result<Bookmarked<HuntReport>> {
    let query = build_query(args)?;
    let report = with_spinner("Hunting for projects", ctx.client.hunt_projects(&query)).await?;

    let outcome = if args.bookmark {
        let reason = args.reason.as_deref().unwrap_or(HUNT_BOOKMARK_REASON);
        let request = report.to_bookmark(ctx.added_by(), reason);
        Some(with_spinner("Saving bookmark", ctx.client.add_hunt_bookmark(&request)).await)
    } else {
        None
    };

    Ok(Bookmarked::new(report, outcome))
}

fn build_query(args: &HuntArgs) -> anyhow::Result<HuntQuery> {
    min_len("domain_focus", &args.domain_focus, MIN_QUERY_LEN)?;
    Ok(HuntQuery {
        domain_focus: non_blank(Some(args.domain_focus.as_str())),
        location: non_blank(args.location.as_deref()),
        industry: non_blank(args.industry.as_deref()),
    })
}
