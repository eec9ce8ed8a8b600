use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AnalysisBookmarkRequest, HuntBookmarkRequest};

/// Reason the dashboard records when a hunt report is bookmarked.
pub const HUNT_BOOKMARK_REASON: &str = "Interesting opportunities found";

/// Reason the dashboard records when an analysis is bookmarked.
pub const ANALYSIS_BOOKMARK_REASON: &str = "Promising company for outreach";

const UNKNOWN_COMPANY: &str = "Unknown";

/// Result of `POST /projects/hunt`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HuntReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub opportunities_report: String,
}

impl HuntReport {
    /// Build the enhanced bookmark the dashboard saves for this report.
    ///
    /// The company name is the domain focus, or `"Unknown"` when the backend
    /// did not echo one.
    #[must_use]
    pub fn to_bookmark(&self, added_by: &str, reason: &str) -> HuntBookmarkRequest {
        HuntBookmarkRequest {
            company_name: self
                .domain_focus
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            domain_focus: self.domain_focus.clone(),
            industry: self.industry.clone(),
            location: self.location.clone(),
            full_report_content: self.opportunities_report.clone(),
            added_by: added_by.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result of `POST /projects/analyze-company`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub readiness_analysis: String,
}

impl AnalysisReport {
    #[must_use]
    pub fn to_bookmark(&self, added_by: &str, reason: &str) -> AnalysisBookmarkRequest {
        AnalysisBookmarkRequest {
            company_name: self
                .company_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            industry: self.industry.clone(),
            location: self.location.clone(),
            full_report_content: self.readiness_analysis.clone(),
            added_by: added_by.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Status object returned by create, send and delete endpoints.
///
/// Every field is optional. `id` and `status` are kept as raw JSON: the mail
/// endpoint answers with string message ids and some deployments send a
/// boolean status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Acknowledgement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Acknowledgement {
    /// Numeric record id, when the backend sent one.
    #[must_use]
    pub fn record_id(&self) -> Option<i64> {
        self.id.as_ref().and_then(serde_json::Value::as_i64)
    }

    /// Status as text; booleans and numbers are rendered as JSON.
    #[must_use]
    pub fn status_text(&self) -> Option<String> {
        self.status.as_ref().map(|status| match status {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}

/// Draft produced by the v1 `POST /email/generate` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneratedEmail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
