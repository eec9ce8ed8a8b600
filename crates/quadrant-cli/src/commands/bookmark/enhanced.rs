use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use quadrant_client::Document;
use quadrant_core::entities::{BookmarkFilter, EnhancedBookmark};
use quadrant_core::enums::{ApiVersion, ReportType};
use quadrant_core::validation::non_blank;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EnhancedCommands;
use crate::commands::shared::parse::parse_optional_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct DownloadResponse {
    id: i64,
    path: String,
    bytes: usize,
}

/// Handle `qdr bookmark enhanced`.
pub async fn handle(
    action: &EnhancedCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EnhancedCommands::List {
            added_by,
            report_type,
        } => {
            let filter = BookmarkFilter {
                added_by: non_blank(added_by.as_deref()),
                report_type: parse_optional_enum(report_type.as_deref(), "report type")?,
            };
            let list = with_spinner(
                "Loading bookmarks",
                ctx.client.get_enhanced_bookmarks(&filter),
            )
            .await?;
            output(&list, flags.format)
        }
        EnhancedCommands::Get { id } => output(&find(ctx, *id).await?, flags.format),
        EnhancedCommands::Delete { id } => {
            let ack = with_spinner(
                "Deleting bookmark",
                ctx.client.delete_enhanced_bookmark(*id),
            )
            .await?;
            output(&ack, flags.format)
        }
        EnhancedCommands::Download {
            id,
            report_type,
            output: target,
        } => {
            let report_type: Option<ReportType> =
                parse_optional_enum(report_type.as_deref(), "report type")?;
            let document = with_spinner("Downloading report", async {
                match report_type {
                    Some(report_type) => ctx.client.download_report(*id, report_type).await,
                    None => ctx.client.download_bookmark_document(*id).await,
                }
            })
            .await?;

            let path = match target {
                Some(target) => PathBuf::from(target),
                None => ctx.download_dir().join(file_name(ctx, *id, &document).await),
            };
            save(&path, &document).await?;

            output(
                &DownloadResponse {
                    id: *id,
                    path: path.display().to_string(),
                    bytes: document.len(),
                },
                flags.format,
            )
        }
    }
}

/// The `v1` backend serves single records; `v2` only lists them.
async fn find(ctx: &AppContext, id: i64) -> anyhow::Result<EnhancedBookmark> {
    if ctx.client.version() == ApiVersion::V1 {
        return Ok(with_spinner("Loading bookmark", ctx.client.get_enhanced_bookmark(id)).await?);
    }

    let list = with_spinner(
        "Loading bookmarks",
        ctx.client.get_enhanced_bookmarks(&BookmarkFilter::default()),
    )
    .await?;
    list.bookmarks
        .into_iter()
        .find(|bookmark| bookmark.id == id)
        .ok_or_else(|| anyhow!("no enhanced bookmark with id {id}"))
}

/// Backend-provided name when sent, else `{company}_{type}_report.docx` from
/// the bookmark record.
async fn file_name(ctx: &AppContext, id: i64, document: &Document) -> String {
    if let Some(name) = document.file_name.as_deref().and_then(safe_name) {
        return name;
    }
    match find(ctx, id).await {
        Ok(bookmark) => bookmark.file_name(),
        Err(error) => {
            tracing::warn!(id, %error, "could not resolve report name");
            format!("bookmark_{id}_report.docx")
        }
    }
}

/// Strip any directory part the backend put in the name.
fn safe_name(name: &str) -> Option<String> {
    Path::new(name)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

async fn save(path: &Path, document: &Document) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, &document.bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}
