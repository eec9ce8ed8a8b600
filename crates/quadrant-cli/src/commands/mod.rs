pub mod analyze;
pub mod bookmark;
pub mod chat;
pub mod dispatch;
pub mod email;
pub mod hunt;
pub mod integrations;
pub mod schema;
pub mod shared;
