//! Simple and enhanced bookmarks.

use quadrant_core::entities::{
    Acknowledgement, AnalysisBookmarkRequest, Bookmark, BookmarkFilter, BookmarkListing,
    EnhancedBookmark, EnhancedBookmarkList, HuntBookmarkRequest,
};
use quadrant_core::enums::ApiVersion;
use reqwest::Method;

use crate::routes::{Endpoint, with_query};
use crate::{ClientError, RequestOptions, ServiceClient};

impl ServiceClient {
    /// Save a simple bookmark.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn add_bookmark(&self, bookmark: &Bookmark) -> Result<Acknowledgement, ClientError> {
        let path = self.route(Endpoint::AddBookmark)?;
        self.request(&path, RequestOptions::json(Method::POST, bookmark)?)
            .await
    }

    /// List simple bookmarks, optionally only those saved by `added_by`.
    ///
    /// Accepts both a bare array and a `{"bookmarks": [...]}` envelope.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn get_bookmarks(&self, added_by: Option<&str>) -> Result<Vec<Bookmark>, ClientError> {
        let path = with_query(
            self.route(Endpoint::ListBookmarks)?,
            &[("added_by", added_by)],
        );
        let listing: BookmarkListing = self.request(&path, RequestOptions::default()).await?;
        Ok(listing.into_vec())
    }

    /// Fetch the simple bookmark for one company. `v1` only.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unsupported`] on `v2`; otherwise see
    /// [`ServiceClient::request`].
    pub async fn get_bookmark_by_company(&self, company_name: &str) -> Result<Bookmark, ClientError> {
        let path = self.route(Endpoint::BookmarkByCompany(company_name))?;
        self.request(&path, RequestOptions::default()).await
    }

    /// Save a hunt report as an enhanced bookmark.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn add_hunt_bookmark(
        &self,
        bookmark: &HuntBookmarkRequest,
    ) -> Result<Acknowledgement, ClientError> {
        let path = self.route(Endpoint::AddHuntBookmark)?;
        tracing::info!(company = %bookmark.company_name, "saving hunt bookmark");
        self.request(&path, RequestOptions::json(Method::POST, bookmark)?)
            .await
    }

    /// Save an analysis report as an enhanced bookmark.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn add_analysis_bookmark(
        &self,
        bookmark: &AnalysisBookmarkRequest,
    ) -> Result<Acknowledgement, ClientError> {
        let path = self.route(Endpoint::AddAnalysisBookmark)?;
        tracing::info!(company = %bookmark.company_name, "saving analysis bookmark");
        self.request(&path, RequestOptions::json(Method::POST, bookmark)?)
            .await
    }

    /// List enhanced bookmarks matching `filter`.
    ///
    /// The `v1` listing takes no filters; they are dropped with a warning.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn get_enhanced_bookmarks(
        &self,
        filter: &BookmarkFilter,
    ) -> Result<EnhancedBookmarkList, ClientError> {
        let base = self.route(Endpoint::ListEnhancedBookmarks)?;
        let path = match self.version() {
            ApiVersion::V2 => with_query(
                base,
                &[
                    ("added_by", filter.added_by.as_deref()),
                    ("report_type", filter.report_type.map(|t| t.as_str())),
                ],
            ),
            ApiVersion::V1 => {
                if !filter.is_empty() {
                    tracing::warn!(?filter, "v1 enhanced listing ignores filters");
                }
                base
            }
        };
        self.request(&path, RequestOptions::default()).await
    }

    /// Fetch one enhanced bookmark. `v1` only.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unsupported`] on `v2`; otherwise see
    /// [`ServiceClient::request`].
    pub async fn get_enhanced_bookmark(&self, id: i64) -> Result<EnhancedBookmark, ClientError> {
        let path = self.route(Endpoint::EnhancedBookmark(id))?;
        self.request(&path, RequestOptions::default()).await
    }

    /// Delete enhanced bookmark `id`. An empty success body yields a default
    /// acknowledgement.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn delete_enhanced_bookmark(&self, id: i64) -> Result<Acknowledgement, ClientError> {
        let path = self.route(Endpoint::DeleteEnhancedBookmark(id))?;
        tracing::info!(id, "deleting enhanced bookmark");
        let ack: Option<Acknowledgement> =
            self.request(&path, RequestOptions::new(Method::DELETE)).await?;
        Ok(ack.unwrap_or_default())
    }
}
