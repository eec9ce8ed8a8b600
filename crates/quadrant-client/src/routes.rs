//! Route tables for the two backend layouts.
//!
//! `v2` is the canonical contract. `v1` is the historical layout kept behind
//! the same operations; an endpoint without a `v1` (or `v2`) path resolves to
//! `None` and the operation fails before touching the network.

use quadrant_core::enums::{ApiVersion, ReportType};

/// One backend capability, independent of how a given version spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint<'a> {
    HuntProjects,
    AnalyzeCompany,
    SendEmail,
    GenerateEmail,
    AddBookmark,
    ListBookmarks,
    BookmarkByCompany(&'a str),
    AddHuntBookmark,
    AddAnalysisBookmark,
    ListEnhancedBookmarks,
    EnhancedBookmark(i64),
    DeleteEnhancedBookmark(i64),
    BookmarkDocument(i64),
    ReportDocument(i64, ReportType),
    Chat,
    ChatEnhanced,
}

impl Endpoint<'_> {
    /// Operation name used in `Unsupported` errors and logs.
    pub(crate) const fn operation(self) -> &'static str {
        match self {
            Self::HuntProjects => "hunt_projects",
            Self::AnalyzeCompany => "analyze_company",
            Self::SendEmail => "send_email",
            Self::GenerateEmail => "generate_email",
            Self::AddBookmark => "add_bookmark",
            Self::ListBookmarks => "get_bookmarks",
            Self::BookmarkByCompany(_) => "get_bookmark_by_company",
            Self::AddHuntBookmark => "add_hunt_bookmark",
            Self::AddAnalysisBookmark => "add_analysis_bookmark",
            Self::ListEnhancedBookmarks => "get_enhanced_bookmarks",
            Self::EnhancedBookmark(_) => "get_enhanced_bookmark",
            Self::DeleteEnhancedBookmark(_) => "delete_enhanced_bookmark",
            Self::BookmarkDocument(_) => "download_bookmark_document",
            Self::ReportDocument(..) => "download_report",
            Self::Chat => "chat",
            Self::ChatEnhanced => "chat_enhanced",
        }
    }

    /// Path (without query string) for `version`, if the endpoint exists there.
    pub(crate) fn path(self, version: ApiVersion) -> Option<String> {
        match version {
            ApiVersion::V2 => self.v2_path(),
            ApiVersion::V1 => self.v1_path(),
        }
    }

    fn v2_path(self) -> Option<String> {
        let path = match self {
            Self::HuntProjects => "/projects/hunt".to_string(),
            Self::AnalyzeCompany => "/projects/analyze-company".to_string(),
            Self::SendEmail => "/sales/email".to_string(),
            Self::AddBookmark => "/projects/bookmark".to_string(),
            Self::ListBookmarks => "/projects/bookmarks".to_string(),
            Self::AddHuntBookmark => "/projects/hunt/bookmark".to_string(),
            Self::AddAnalysisBookmark => "/projects/analyze-company/bookmark".to_string(),
            Self::ListEnhancedBookmarks => "/projects/bookmarks/enhanced".to_string(),
            Self::DeleteEnhancedBookmark(id) => format!("/projects/bookmarks/{id}"),
            Self::BookmarkDocument(id) | Self::ReportDocument(id, _) => {
                format!("/projects/bookmarks/{id}/download")
            }
            Self::Chat => "/projects/chat".to_string(),
            Self::ChatEnhanced => "/projects/chat/enhanced".to_string(),
            Self::GenerateEmail | Self::BookmarkByCompany(_) | Self::EnhancedBookmark(_) => {
                return None;
            }
        };
        Some(path)
    }

    fn v1_path(self) -> Option<String> {
        let path = match self {
            Self::HuntProjects => "/hunt/projects".to_string(),
            Self::AnalyzeCompany => "/analyze/company".to_string(),
            Self::SendEmail => "/email/send".to_string(),
            Self::GenerateEmail => "/email/generate".to_string(),
            Self::AddBookmark => "/bookmarks/add".to_string(),
            Self::ListBookmarks => "/bookmarks/list".to_string(),
            Self::BookmarkByCompany(name) => {
                format!("/bookmarks/company/{}", urlencoding::encode(name))
            }
            Self::AddHuntBookmark => "/bookmarks/hunt/add".to_string(),
            Self::AddAnalysisBookmark => "/bookmarks/analysis/add".to_string(),
            Self::ListEnhancedBookmarks => "/bookmarks/enhanced/list".to_string(),
            Self::EnhancedBookmark(id) | Self::DeleteEnhancedBookmark(id) => {
                format!("/bookmarks/enhanced/{id}")
            }
            Self::ReportDocument(id, report_type) => {
                format!("/documents/{report_type}/download/{id}")
            }
            Self::Chat => "/chat".to_string(),
            Self::BookmarkDocument(_) | Self::ChatEnhanced => return None,
        };
        Some(path)
    }
}

/// Append the present `(key, value)` pairs as a percent-encoded query string.
pub(crate) fn with_query(path: String, params: &[(&str, Option<&str>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={}", urlencoding::encode(v))))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Endpoint::HuntProjects, "/projects/hunt")]
    #[case(Endpoint::AnalyzeCompany, "/projects/analyze-company")]
    #[case(Endpoint::SendEmail, "/sales/email")]
    #[case(Endpoint::AddHuntBookmark, "/projects/hunt/bookmark")]
    #[case(Endpoint::AddAnalysisBookmark, "/projects/analyze-company/bookmark")]
    #[case(Endpoint::DeleteEnhancedBookmark(42), "/projects/bookmarks/42")]
    #[case(Endpoint::BookmarkDocument(42), "/projects/bookmarks/42/download")]
    #[case(Endpoint::ChatEnhanced, "/projects/chat/enhanced")]
    fn canonical_paths(#[case] endpoint: Endpoint<'_>, #[case] expected: &str) {
        assert_eq!(endpoint.path(ApiVersion::V2).as_deref(), Some(expected));
    }

    #[rstest]
    #[case(Endpoint::HuntProjects, "/hunt/projects")]
    #[case(Endpoint::GenerateEmail, "/email/generate")]
    #[case(Endpoint::BookmarkByCompany("Acme & Co"), "/bookmarks/company/Acme%20%26%20Co")]
    #[case(Endpoint::DeleteEnhancedBookmark(9), "/bookmarks/enhanced/9")]
    #[case(Endpoint::ReportDocument(9, ReportType::Hunt), "/documents/hunt/download/9")]
    #[case(
        Endpoint::ReportDocument(9, ReportType::Analysis),
        "/documents/analysis/download/9"
    )]
    fn legacy_paths(#[case] endpoint: Endpoint<'_>, #[case] expected: &str) {
        assert_eq!(endpoint.path(ApiVersion::V1).as_deref(), Some(expected));
    }

    #[test]
    fn each_version_lacks_the_other_versions_extras() {
        assert!(Endpoint::ChatEnhanced.path(ApiVersion::V1).is_none());
        assert!(Endpoint::BookmarkDocument(1).path(ApiVersion::V1).is_none());
        assert!(Endpoint::GenerateEmail.path(ApiVersion::V2).is_none());
        assert!(Endpoint::EnhancedBookmark(1).path(ApiVersion::V2).is_none());
    }

    #[test]
    fn report_download_ignores_type_in_canonical_layout() {
        assert_eq!(
            Endpoint::ReportDocument(5, ReportType::Analysis).path(ApiVersion::V2),
            Endpoint::BookmarkDocument(5).path(ApiVersion::V2)
        );
    }

    #[test]
    fn query_skips_absent_params() {
        let path = with_query(
            "/projects/bookmarks/enhanced".into(),
            &[("added_by", Some("Sales Rep")), ("report_type", None)],
        );
        assert_eq!(path, "/projects/bookmarks/enhanced?added_by=Sales%20Rep");
    }

    #[test]
    fn query_encodes_both_filters() {
        let path = with_query(
            "/projects/bookmarks/enhanced".into(),
            &[("added_by", Some("Dana & Co")), ("report_type", Some("hunt"))],
        );
        assert_eq!(
            path,
            "/projects/bookmarks/enhanced?added_by=Dana%20%26%20Co&report_type=hunt"
        );
    }

    #[test]
    fn query_is_omitted_when_empty() {
        assert_eq!(with_query("/x".into(), &[("a", None)]), "/x");
    }
}
