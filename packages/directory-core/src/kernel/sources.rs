//! Provider sources: the remote JSON feed and a local JSON file.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use super::traits::BaseProviderSource;
use crate::domains::providers::ProviderRecord;
use crate::error::{Result, SourceError};

/// Reads the provider feed over HTTP
pub struct HttpProviderSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProviderSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl BaseProviderSource for HttpProviderSource {
    async fn fetch_providers(&self) -> Result<Vec<ProviderRecord>> {
        debug!(url = %self.url, "Fetching provider feed");

        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.bytes().await?;
        let records: Vec<ProviderRecord> = serde_json::from_slice(&body)?;

        info!(url = %self.url, count = records.len(), "Provider feed loaded");
        Ok(records)
    }
}

/// Reads the provider feed from a JSON file on disk
pub struct FileProviderSource {
    path: PathBuf,
}

impl FileProviderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BaseProviderSource for FileProviderSource {
    async fn fetch_providers(&self) -> Result<Vec<ProviderRecord>> {
        let data = tokio::fs::read(&self.path).await?;
        let records: Vec<ProviderRecord> = serde_json::from_slice(&data)?;

        info!(path = %self.path.display(), count = records.len(), "Provider file loaded");
        Ok(records)
    }
}
