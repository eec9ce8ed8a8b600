//! # quadrant-schema
//!
//! JSON Schemas for every request and result type exchanged with the sales
//! agent backend.
//!
//! Wire types are defined in `quadrant-core` with `#[derive(JsonSchema)]`.
//! This crate collects them under stable snake_case names, validates
//! arbitrary JSON against them, and backs the `qdr schema` command.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
