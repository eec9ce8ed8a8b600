use quadrant_client::ClientError;
use quadrant_core::entities::Acknowledgement;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

/// A report plus the outcome of the optional `--bookmark` step.
///
/// A failed bookmark never discards the report: it is rendered with
/// `bookmark_error` set and the command then exits non-zero.
#[derive(Debug, Serialize)]
pub struct Bookmarked<R> {
    #[serde(flatten)]
    pub report: R,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<Acknowledgement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark_error: Option<String>,
}

impl<R: Serialize> Bookmarked<R> {
    pub fn new(report: R, outcome: Option<Result<Acknowledgement, ClientError>>) -> Self {
        let (bookmark, bookmark_error) = match outcome {
            Some(Ok(ack)) => (Some(ack), None),
            Some(Err(error)) => {
                tracing::warn!(%error, "report kept, bookmark not saved");
                (None, Some(error.to_string()))
            }
            None => (None, None),
        };
        Self {
            report,
            bookmark,
            bookmark_error,
        }
    }

    /// Print the report, then fail if the bookmark could not be saved.
    pub fn finish(&self, flags: &GlobalFlags) -> anyhow::Result<()> {
        output(self, flags.format)?;
        if let Some(error) = &self.bookmark_error {
            anyhow::bail!("report shown above, but the bookmark was not saved: {error}");
        }
        Ok(())
    }
}
