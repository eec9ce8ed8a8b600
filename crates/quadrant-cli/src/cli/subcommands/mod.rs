mod bookmark;
mod email;

pub use bookmark::{BookmarkCommands, EnhancedCommands};
pub use email::{EmailArgs, EmailCommands};
