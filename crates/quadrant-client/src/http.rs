//! Shared HTTP response helpers.
//!
//! Centralizes the error contract (status checks, `detail` extraction,
//! boundary decoding) so the operation modules stay focused on request
//! construction.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::documents::Document;
use crate::error::ClientError;

/// Message used when an error body is not JSON.
pub(crate) const REQUEST_FAILED: &str = "Request failed";

/// Read a JSON response, mapping non-success statuses to [`ClientError::Api`].
pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    let body = resp.bytes().await?;

    if !status.is_success() {
        let message = error_message(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), %message, "backend rejected request");
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    decode(&body)
}

/// Read a binary response. Non-success statuses become
/// [`ClientError::Download`] whatever the body says.
pub(crate) async fn read_document(resp: reqwest::Response) -> Result<Document, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "document download rejected");
        return Err(ClientError::Download {
            status: status.as_u16(),
        });
    }

    let content_type = header_str(&resp, reqwest::header::CONTENT_TYPE);
    let file_name = header_str(&resp, reqwest::header::CONTENT_DISPOSITION)
        .as_deref()
        .and_then(disposition_file_name);
    let bytes = resp.bytes().await?.to_vec();

    Ok(Document {
        bytes,
        content_type,
        file_name,
    })
}

/// Parse a success body and check it against `T`.
///
/// An empty body reads as JSON `null` for result types that accept it
/// (`Option<T>`, `()`); for any other `T` it is a [`ClientError::Parse`].
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(Value::Null)
            .map_err(|_| ClientError::Parse("empty response body".to_string()));
    }

    let value =
        serde_json::from_slice::<Value>(body).map_err(|e| ClientError::Parse(e.to_string()))?;

    serde_json::from_value(value).map_err(|e| ClientError::Schema {
        expected: std::any::type_name::<T>(),
        reason: e.to_string(),
    })
}

/// Message for a non-success response body.
///
/// - not JSON (including empty): `"Request failed"`
/// - JSON with a non-empty string `detail`: that string
/// - JSON with another truthy `detail` (list, object, ...): its compact JSON
/// - anything else: `"HTTP error! status: {status}"`
pub(crate) fn error_message(status: u16, body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return REQUEST_FAILED.to_string();
    };

    match value.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(detail) if is_truthy(detail) && !detail.is_string() => detail.to_string(),
        _ => format!("HTTP error! status: {status}"),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn header_str(resp: &reqwest::Response, name: reqwest::header::HeaderName) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Extract the file name from a `Content-Disposition` header, preferring the
/// RFC 5987 `filename*` form.
fn disposition_file_name(header: &str) -> Option<String> {
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        if let Some(encoded) = part.strip_prefix("filename*=") {
            let encoded = encoded.rsplit("''").next().unwrap_or(encoded);
            if let Ok(decoded) = urlencoding::decode(encoded.trim_matches('"')) {
                return Some(decoded.into_owned());
            }
        } else if let Some(name) = part.strip_prefix("filename=") {
            plain = Some(name.trim_matches('"').to_string());
        }
    }
    plain.filter(|name| !name.is_empty())
}
