use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ReportType;

/// A minimal saved note about a company.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Bookmark {
    /// Assigned by the backend; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub company_name: String,
    pub analysis_summary: String,
    pub added_by: String,
    pub reason: String,
}

/// Body listing endpoints return for simple bookmarks.
///
/// Deployed backends answer either with a bare array or with a
/// `{ "bookmarks": [...] }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum BookmarkListing {
    Bare(Vec<Bookmark>),
    Wrapped {
        #[serde(default)]
        bookmarks: Vec<Bookmark>,
    },
}

impl BookmarkListing {
    #[must_use]
    pub fn into_vec(self) -> Vec<Bookmark> {
        match self {
            Self::Bare(bookmarks) | Self::Wrapped { bookmarks } => bookmarks,
        }
    }
}

/// Create a `hunt` enhanced bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HuntBookmarkRequest {
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub full_report_content: String,
    pub added_by: String,
    pub reason: String,
}

/// Create an `analysis` enhanced bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisBookmarkRequest {
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub full_report_content: String,
    pub added_by: String,
    pub reason: String,
}

/// A saved report, as returned by the enhanced listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnhancedBookmark {
    pub id: i64,
    pub report_type: ReportType,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Listings may leave the report body out.
    #[serde(default)]
    pub full_report_content: String,
    pub added_by: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl EnhancedBookmark {
    /// Short subtitle shown next to the company name.
    #[must_use]
    pub fn headline(&self) -> &str {
        [&self.domain_focus, &self.industry]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|value| !value.is_empty())
            .unwrap_or("Analysis")
    }

    /// File name the document for this bookmark is saved under.
    #[must_use]
    pub fn file_name(&self) -> String {
        report_file_name(&self.company_name, self.report_type)
    }
}

/// Envelope of `GET /projects/bookmarks/enhanced`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnhancedBookmarkList {
    #[serde(default)]
    pub bookmarks: Vec<EnhancedBookmark>,
}

/// Optional filters for the enhanced listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkFilter {
    pub added_by: Option<String>,
    pub report_type: Option<ReportType>,
}

impl BookmarkFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added_by.is_none() && self.report_type.is_none()
    }
}

/// `{company}_{report_type}_report.docx`
#[must_use]
pub fn report_file_name(company_name: &str, report_type: ReportType) -> String {
    format!("{company_name}_{report_type}_report.docx")
}
