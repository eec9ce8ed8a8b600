//! In-process backend for handler tests.

use axum::Router;
use quadrant_client::ServiceClient;
use quadrant_config::QuadrantConfig;
use tokio_util::sync::CancellationToken;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;

/// Serve `app` on an ephemeral port and build a context pointed at it.
pub async fn context(app: Router) -> AppContext {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    AppContext {
        client: ServiceClient::new(Some(&format!("http://{addr}"))).unwrap(),
        config: QuadrantConfig::default(),
        cancel: CancellationToken::new(),
    }
}

pub fn json_flags() -> GlobalFlags {
    GlobalFlags {
        format: OutputFormat::Json,
        quiet: true,
        verbose: false,
        base_url: None,
        timeout: None,
    }
}
