use quadrant_core::entities::{ANALYSIS_BOOKMARK_REASON, AnalysisQuery, AnalysisReport};
use quadrant_core::validation::{MIN_QUERY_LEN, min_len, non_blank};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::bookmarked::Bookmarked;
use crate::context::AppContext;
use crate::progress::with_spinner;

/// Handle `qdr analyze`.
pub async fn handle(
    args: &AnalyzeArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    run(args, ctx).await?.finish(flags)
}

async fn run(
    args: &AnalyzeArgs,
    ctx: &AppContext,
) -> anyhow::Result<Bookmarked<AnalysisReport>> {
    min_len("company_name", &args.company_name, MIN_QUERY_LEN)?;
    let query = AnalysisQuery {
        company_name: non_blank(Some(args.company_name.as_str())),
        industry: non_blank(args.industry.as_deref()),
        location: non_blank(args.location.as_deref()),
    };

    let report =
        with_spinner("Analyzing company", ctx.client.analyze_company(&query)).await?;

    let outcome = if args.bookmark {
        let reason = args.reason.as_deref().unwrap_or(ANALYSIS_BOOKMARK_REASON);
        let request = report.to_bookmark(ctx.added_by(), reason);
        Some(with_spinner("Saving bookmark", ctx.client.add_analysis_bookmark(&request)).await)
    } else {
        None
    };

    Ok(Bookmarked::new(report, outcome))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::commands::shared::test_backend;

    fn args(company_name: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            company_name: company_name.into(),
            location: None,
            industry: None,
            bookmark: true,
            reason: None,
        }
    }

    fn backend() -> Router {
        Router::new()
            .route(
                "/projects/analyze-company",
                post(|| async {
                    axum::Json(json!({
                        "company_name": "Acme",
                        "readiness_analysis": "Acme is ready for outreach.",
                    }))
                }),
            )
            .route(
                "/projects/analyze-company/bookmark",
                post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
            )
    }

    #[tokio::test]
    async fn failed_bookmark_keeps_the_analysis() {
        let ctx = test_backend::context(backend()).await;

        let response = run(&args("Acme"), &ctx).await.expect("analysis succeeds");
        assert_eq!(response.report.readiness_analysis, "Acme is ready for outreach.");
        assert_eq!(response.bookmark_error.as_deref(), Some("Request failed"));

        let rendered = serde_json::to_value(&response).expect("serializes");
        assert_eq!(rendered["readiness_analysis"], "Acme is ready for outreach.");
        assert_eq!(rendered["bookmark_error"], "Request failed");
        assert!(rendered.get("bookmark").is_none());

        assert!(response.finish(&test_backend::json_flags()).is_err());
    }

    #[tokio::test]
    async fn short_company_name_is_rejected_before_any_request() {
        let ctx = test_backend::context(Router::new()).await;
        let err = run(&args("A"), &ctx).await.expect_err("too short");
        assert_eq!(err.to_string(), "company_name: must be at least 2 characters");
    }
}
