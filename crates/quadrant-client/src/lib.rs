//! # quadrant-client
//!
//! HTTP client for the Quadrant sales agent backend.
//!
//! [`ServiceClient`] wraps a base address and exposes one async operation per
//! backend capability:
//! - project hunt and company analysis reports
//! - outbound email
//! - simple and enhanced bookmarks
//! - company chat
//! - bookmarked report documents
//!
//! Every failure is a single [`ClientError`] whose message is what a front end
//! shows. Nothing is retried. A client can be scoped to a cancellation token
//! and a per-request timeout; clones share one connection pool.

mod bookmarks;
mod chat;
mod documents;
mod error;
mod http;
mod projects;
mod routes;
mod sales;

pub use documents::Document;
pub use error::ClientError;

use std::future::Future;
use std::time::Duration;

use quadrant_core::DEFAULT_BASE_URL;
use quadrant_core::enums::ApiVersion;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::routes::Endpoint;

// ── Request options ────────────────────────────────────────────────

/// Method, body and headers for [`ServiceClient::request`].
///
/// Defaults to a `GET` with no body and no extra headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// Already-serialized body.
    pub body: Option<String>,
    /// Merged over `Content-Type: application/json`; these win on conflict.
    pub headers: HeaderMap,
}

impl RequestOptions {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Options carrying `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Encode`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(method: Method, body: &B) -> Result<Self, ClientError> {
        Ok(Self {
            method,
            body: Some(serde_json::to_string(body).map_err(ClientError::Encode)?),
            headers: HeaderMap::new(),
        })
    }

    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Client for the sales agent backend.
///
/// Holds only immutable configuration; construct one and pass it to whatever
/// needs it.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
    version: ApiVersion,
    timeout: Option<Duration>,
    cancel: CancellationToken,
}

impl ServiceClient {
    /// Create a client for `base_url`, or for `http://localhost:8000` when
    /// `None` or blank. Speaks the canonical (`v2`) API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the address is not an
    /// absolute http(s) URL, or [`ClientError::Transport`] if the HTTP client
    /// cannot be built.
    pub fn new(base_url: Option<&str>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("quadrant/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http_client(http, base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] for a malformed address.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: Option<&str>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
            version: ApiVersion::default(),
            timeout: None,
            cancel: CancellationToken::new(),
        })
    }

    /// Select the route layout. See [`ApiVersion`].
    #[must_use]
    pub const fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Bound every request made through this client. `None` leaves the
    /// transport default in place.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Abort in-flight requests with [`ClientError::Cancelled`] once `token`
    /// is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Issue a request against `path` and decode the JSON answer as `T`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] for a non-success status, carrying the backend's
    ///   `detail` when present
    /// - [`ClientError::Parse`] / [`ClientError::Schema`] when a success body
    ///   is not JSON or does not match `T`
    /// - [`ClientError::Transport`], [`ClientError::Timeout`],
    ///   [`ClientError::Cancelled`]
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let RequestOptions {
            method,
            body,
            headers,
        } = options;

        tracing::debug!(%method, path, "sending request");
        let mut builder = self
            .http
            .request(method, self.url(path))
            .headers(merge_headers(&headers));
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        self.guarded(async move {
            let resp = builder.send().await?;
            tracing::debug!(status = resp.status().as_u16(), path, "received response");
            http::read_json(resp).await
        })
        .await
    }

    /// Resolve `endpoint` for this client's API version.
    pub(crate) fn route(&self, endpoint: Endpoint<'_>) -> Result<String, ClientError> {
        endpoint
            .path(self.version)
            .ok_or(ClientError::Unsupported {
                operation: endpoint.operation(),
                version: self.version,
            })
    }

    /// Plain `GET` for a binary payload. Bypasses the JSON contract.
    pub(crate) async fn fetch_document(&self, path: &str) -> Result<Document, ClientError> {
        tracing::debug!(path, "downloading document");
        let mut builder = self.http.get(self.url(path));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        self.guarded(async move { http::read_document(builder.send().await?).await })
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Race `operation` against the cancellation token.
    async fn guarded<T>(
        &self,
        operation: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, ClientError> {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => {
                tracing::warn!(base_url = %self.base_url, "request cancelled");
                Err(ClientError::Cancelled)
            }
            result = operation => result,
        }
    }
}

fn normalize_base_url(raw: Option<&str>) -> Result<String, ClientError> {
    let raw = raw
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);

    let url = reqwest::Url::parse(raw).map_err(|e| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

/// `Content-Type: application/json`, overridden by any caller header of the
/// same name.
fn merge_headers(caller: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for name in caller.keys() {
        headers.remove(name);
    }
    for (name, value) in caller {
        headers.append(name.clone(), value.clone());
    }
    headers
}
