//! Bookmarked report documents.

use quadrant_core::enums::ReportType;

use crate::routes::Endpoint;
use crate::{ClientError, ServiceClient};

/// A downloaded report document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    /// Name from `Content-Disposition`, when the backend sent one.
    pub file_name: Option<String>,
}

impl Document {
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The backend-provided name, or `fallback`.
    #[must_use]
    pub fn file_name_or(&self, fallback: impl Into<String>) -> String {
        self.file_name.clone().unwrap_or_else(|| fallback.into())
    }
}

impl ServiceClient {
    /// Download the document generated for enhanced bookmark `id`.
    ///
    /// # Errors
    ///
    /// Any non-success status is [`ClientError::Download`]; the backend's
    /// `detail` is not surfaced.
    pub async fn download_bookmark_document(&self, id: i64) -> Result<Document, ClientError> {
        let path = self.route(Endpoint::BookmarkDocument(id))?;
        self.fetch_document(&path).await
    }

    /// Download the document for bookmark `id` through the report-type
    /// specific route.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::download_bookmark_document`].
    pub async fn download_report(
        &self,
        id: i64,
        report_type: ReportType,
    ) -> Result<Document, ClientError> {
        let path = self.route(Endpoint::ReportDocument(id, report_type))?;
        self.fetch_document(&path).await
    }

    /// Download the hunt report document for bookmark `id`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::download_bookmark_document`].
    pub async fn download_hunt_report(&self, id: i64) -> Result<Document, ClientError> {
        self.download_report(id, ReportType::Hunt).await
    }

    /// Download the analysis report document for bookmark `id`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::download_bookmark_document`].
    pub async fn download_analysis_report(&self, id: i64) -> Result<Document, ClientError> {
        self.download_report(id, ReportType::Analysis).await
    }
}
