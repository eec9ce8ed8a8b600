//! # quadrant-core
//!
//! Wire types shared by every Quadrant crate.
//!
//! This crate provides:
//! - Request and result records exchanged with the sales agent backend
//! - Enums for report types, chat roles, API versions and integration status
//! - The static integrations catalog
//! - Form validation helpers used before a request is issued
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod integrations;
pub mod validation;

/// Backend address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Submitter name the dashboard attaches to bookmarks.
pub const DEFAULT_ADDED_BY: &str = "Sales Rep";
