//! Records exchanged with the sales agent backend.
//!
//! The backend owns identity and persistence. Every struct here is a plain
//! value that lives for one request. All of them derive `Serialize`,
//! `Deserialize` and `JsonSchema` so results can be checked at the boundary
//! and their schemas published.

mod bookmarks;
mod chat;
mod queries;
mod reports;

pub use bookmarks::{
    AnalysisBookmarkRequest, Bookmark, BookmarkFilter, BookmarkListing, EnhancedBookmark,
    EnhancedBookmarkList, HuntBookmarkRequest, report_file_name,
};
pub use chat::{ChatReply, ChatRequest, ChatTurn, EnhancedChatRequest, LegacyChatRequest};
pub use queries::{AnalysisQuery, EmailDraft, HuntQuery};
pub use reports::{
    ANALYSIS_BOOKMARK_REASON, Acknowledgement, AnalysisReport, GeneratedEmail, HUNT_BOOKMARK_REASON,
    HuntReport,
};
