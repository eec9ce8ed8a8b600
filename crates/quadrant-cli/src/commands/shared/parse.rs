use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional enum flag.
pub fn parse_optional_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|value| parse_enum(value, field)).transpose()
}
