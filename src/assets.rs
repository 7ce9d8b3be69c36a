//! PDF asset delivery.
//!
//! Assets are read from a local directory first. When a remote base URL is
//! configured, missing local files are fetched from there (with retry), and
//! "view" links point at an embedded online viewer wrapping the remote URL.

use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

const VIEWER_BASE: &str = "https://drive.google.com/viewerng/viewer?embedded=true&url=";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Invalid asset name: {0:?}")]
    InvalidName(String),

    #[error("Remote asset request failed: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Remote asset host returned {status} for {name}")]
    RemoteStatus { name: String, status: u16 },

    #[error("Failed to read asset {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    /// Transport errors and 5xx responses may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            AssetError::Remote(_) => true,
            AssetError::RemoteStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Where an asset's "view" and "download" controls point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLinks {
    pub view_url: String,
    /// `None` when the asset cannot be served; the page shows a notice instead
    pub download_url: Option<String>,
}

/// Local-first asset fetcher with optional remote fallback.
#[derive(Debug, Clone)]
pub struct AssetStore {
    local_dir: PathBuf,
    remote_base: Option<String>,
    client: reqwest::Client,
    retry: RetryConfig,
    /// Remote existence checks keyed by asset name
    remote_known: Arc<Mutex<HashMap<String, bool>>>,
}

impl AssetStore {
    pub fn new(local_dir: impl Into<PathBuf>, remote_base: Option<String>) -> Self {
        Self {
            local_dir: local_dir.into(),
            remote_base,
            client: reqwest::Client::new(),
            retry: RetryConfig::asset_fetch(),
            remote_known: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.assets_dir.clone(), config.asset_remote_base.clone())
    }

    #[cfg(test)]
    fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Asset names are bare file names; anything that could walk out of the
    /// assets directory is rejected.
    pub fn validate_name(name: &str) -> Result<(), AssetError> {
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0']);
        if invalid {
            return Err(AssetError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    fn local_path(&self, name: &str) -> PathBuf {
        self.local_dir.join(name)
    }

    /// Remote URL of an asset, if a remote base is configured.
    pub fn remote_url(&self, name: &str) -> Option<String> {
        self.remote_base
            .as_ref()
            .map(|base| format!("{}{}", base, urlencoding::encode(name)))
    }

    /// Whether `fetch` can be expected to succeed without downloading it.
    ///
    /// Local files are checked on disk. Otherwise the remote copy is probed
    /// with a `HEAD` request; definite answers are remembered, while transport
    /// errors and 5xx responses count as unavailable and are asked again later.
    pub async fn is_available(&self, name: &str) -> bool {
        if Self::validate_name(name).is_err() {
            return false;
        }
        if tokio::fs::try_exists(self.local_path(name))
            .await
            .unwrap_or(false)
        {
            return true;
        }
        let Some(url) = self.remote_url(name) else {
            return false;
        };
        let known = self.remote_known().get(name).copied();
        if let Some(known) = known {
            return known;
        }

        match self.client.head(&url).send().await {
            Ok(response) => {
                let status = response.status();
                let available = status.is_success();
                if !available {
                    debug!("Remote asset {} answered {}", name, status);
                }
                if !status.is_server_error() {
                    self.remote_known().insert(name.to_string(), available);
                }
                available
            }
            Err(e) => {
                warn!("Could not check remote asset {}: {}", name, e);
                false
            }
        }
    }

    fn remote_known(&self) -> MutexGuard<'_, HashMap<String, bool>> {
        self.remote_known
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Links for the view/download controls of `name`.
    pub async fn links(&self, name: &str) -> AssetLinks {
        let local_route = format!("/assets/{}", urlencoding::encode(name));
        let view_url = match self.remote_url(name) {
            Some(remote) => format!("{}{}", VIEWER_BASE, urlencoding::encode(&remote)),
            None => local_route.clone(),
        };
        let download_url = if self.is_available(name).await {
            Some(format!("{}/download", local_route))
        } else {
            None
        };

        AssetLinks {
            view_url,
            download_url,
        }
    }

    /// Fetch the bytes of `name`: local file first, then the remote copy.
    pub async fn fetch(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        Self::validate_name(name)?;

        match tokio::fs::read(self.local_path(name)).await {
            Ok(bytes) => {
                debug!("Serving asset {} from local storage", name);
                return Ok(bytes);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AssetError::Io {
                    name: name.to_string(),
                    source: e,
                })
            }
        }

        let Some(url) = self.remote_url(name) else {
            return Err(AssetError::NotFound(name.to_string()));
        };

        info!("Asset {} not stored locally, fetching from remote", name);
        let operation_name = format!("Fetch asset {}", name);
        with_retry_if(
            &self.retry,
            &operation_name,
            || self.fetch_remote(name, &url),
            AssetError::is_retryable,
        )
        .await
        .inspect_err(|e| warn!("Remote fetch of {} failed: {}", name, e))
    }

    async fn fetch_remote(&self, name: &str, url: &str) -> Result<Vec<u8>, AssetError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AssetError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(AssetError::RemoteStatus {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
