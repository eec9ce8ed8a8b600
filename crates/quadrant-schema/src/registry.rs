//! Name-indexed store of the wire type schemas.

use std::collections::HashMap;

use quadrant_core::entities;
use schemars::schema_for;

use crate::error::SchemaError;

/// Every request and result schema, keyed by snake_case type name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build the registry from the `quadrant-core` wire types.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema, which it does not for derived schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Requests ---
        register!(schemas, "hunt_query", entities::HuntQuery);
        register!(schemas, "analysis_query", entities::AnalysisQuery);
        register!(schemas, "email_draft", entities::EmailDraft);
        register!(schemas, "bookmark", entities::Bookmark);
        register!(
            schemas,
            "hunt_bookmark_request",
            entities::HuntBookmarkRequest
        );
        register!(
            schemas,
            "analysis_bookmark_request",
            entities::AnalysisBookmarkRequest
        );
        register!(schemas, "chat_request", entities::ChatRequest);
        register!(
            schemas,
            "enhanced_chat_request",
            entities::EnhancedChatRequest
        );
        register!(schemas, "legacy_chat_request", entities::LegacyChatRequest);

        // --- Results ---
        register!(schemas, "hunt_report", entities::HuntReport);
        register!(schemas, "analysis_report", entities::AnalysisReport);
        register!(schemas, "acknowledgement", entities::Acknowledgement);
        register!(schemas, "generated_email", entities::GeneratedEmail);
        register!(schemas, "bookmark_listing", entities::BookmarkListing);
        register!(schemas, "enhanced_bookmark", entities::EnhancedBookmark);
        register!(
            schemas,
            "enhanced_bookmark_list",
            entities::EnhancedBookmarkList
        );
        register!(schemas, "chat_reply", entities::ChatReply);

        // --- Local only ---
        register!(schemas, "chat_turn", entities::ChatTurn);

        Self { schemas }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Unknown` for an unregistered name, or
    /// `SchemaError::Mismatch` listing every violation.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::Unknown(name.to_string()))?;

        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
                schema: name.to_string(),
                reason: e.to_string(),
            })?;

        let violations: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{} at '{}'", e, e.instance_path))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Mismatch {
                schema: name.to_string(),
                violations,
            })
        }
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
