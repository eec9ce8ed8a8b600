use anyhow::{Context, anyhow};
use quadrant_schema::SchemaRegistry;
use serde::Serialize;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ValidationResponse<'a> {
    schema: &'a str,
    file: &'a str,
    valid: bool,
}

/// Handle `qdr schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(name) = args.type_name.as_deref() else {
        return output(&registry.list(), flags.format);
    };

    if let Some(file) = args.validate.as_deref() {
        let raw = std::fs::read_to_string(file).with_context(|| format!("failed to read {file}"))?;
        let instance: serde_json::Value =
            serde_json::from_str(&raw).with_context(|| format!("{file} is not valid JSON"))?;
        registry.validate(name, &instance)?;
        return output(
            &ValidationResponse {
                schema: name,
                file,
                valid: true,
            },
            flags.format,
        );
    }

    let schema = registry.get(name).ok_or_else(|| {
        anyhow!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        )
    })?;

    // A schema does not tabulate; show it as JSON.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output(schema, format)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            base_url: None,
            timeout: None,
        }
    }

    fn args(name: &str, file: &tempfile::NamedTempFile) -> SchemaArgs {
        SchemaArgs {
            type_name: Some(name.into()),
            validate: Some(file.path().display().to_string()),
        }
    }

    #[test]
    fn conforming_file_validates() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"response": "Acme is hiring."}}"#).expect("write");
        handle(&args("chat_reply", &file), &flags()).expect("should validate");
    }

    #[test]
    fn nonconforming_file_reports_schema() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"company_name": "Acme"}}"#).expect("write");
        let err = handle(&args("enhanced_chat_request", &file), &flags()).expect_err("missing question");
        assert!(err.to_string().contains("enhanced_chat_request"));
    }

    #[test]
    fn unknown_schema_lists_names() {
        let err = handle(
            &SchemaArgs {
                type_name: Some("session".into()),
                validate: None,
            },
            &flags(),
        )
        .expect_err("unknown schema");
        assert!(err.to_string().contains("hunt_report"));
    }
}
