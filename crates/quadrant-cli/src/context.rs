use std::path::PathBuf;

use quadrant_client::ServiceClient;
use quadrant_config::QuadrantConfig;
use tokio_util::sync::CancellationToken;

/// Everything a command handler needs: the configured client and the
/// settings it was built from.
pub struct AppContext {
    pub client: ServiceClient,
    pub config: QuadrantConfig,
    pub cancel: CancellationToken,
}

impl AppContext {
    pub fn init(config: QuadrantConfig, cancel: CancellationToken) -> anyhow::Result<Self> {
        let client = ServiceClient::new(Some(config.api.base_url()))?
            .with_version(config.api.version)
            .with_timeout(config.api.timeout())
            .with_cancellation(cancel.clone());

        tracing::debug!(
            base_url = client.base_url(),
            version = %client.version(),
            "client configured"
        );

        Ok(Self {
            client,
            config,
            cancel,
        })
    }

    /// Name recorded on bookmarks this user saves.
    pub fn added_by(&self) -> &str {
        &self.config.general.added_by
    }

    pub fn download_dir(&self) -> PathBuf {
        self.config
            .general
            .download_dir
            .as_deref()
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
    }
}
