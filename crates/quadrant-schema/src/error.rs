use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no schema named '{0}'")]
    Unknown(String),

    /// Every violation found, in validator order.
    #[error("value does not match '{schema}': {}", violations.join("; "))]
    Mismatch {
        schema: String,
        violations: Vec<String>,
    },

    /// A registered schema failed to compile.
    #[error("schema '{schema}' does not compile: {reason}")]
    Compile { schema: String, reason: String },
}
