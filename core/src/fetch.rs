//! Upstream document retrieval.
//!
//! One request per call. Retrying is left to the caller (the user reloads).

use std::future::Future;
use std::time::Duration;

use tactidex_types::CodexConfig;
use thiserror::Error;

use crate::raw::RawDocument;

const USER_AGENT: &str = concat!("tactidex/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("invalid document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce the raw export document.
pub trait DocumentSource {
    fn fetch_document(&self) -> impl Future<Output = Result<RawDocument, FetchError>> + Send;
}

/// Decode an export body. Unknown fields are ignored, missing ones default.
pub fn parse_document(bytes: &[u8]) -> Result<RawDocument, FetchError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// HTTP client for the CommunityDragon TFT export.
#[derive(Debug, Clone)]
pub struct CommunityDragonClient {
    http: reqwest::Client,
    data_url: String,
    timeout: Option<Duration>,
}

impl CommunityDragonClient {
    pub fn new(data_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            http: reqwest::Client::new(),
            data_url: data_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &CodexConfig) -> Self {
        Self::new(
            config.data_url.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Raw response body, unparsed.
    pub async fn fetch_bytes(&self) -> Result<Vec<u8>, FetchError> {
        let mut request = self.http.get(&self.data_url).header("User-Agent", USER_AGENT);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.data_url, status = status.as_u16(), "Export request rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        tracing::debug!(url = %self.data_url, bytes = bytes.len(), "Downloaded export");
        Ok(bytes.to_vec())
    }
}

impl DocumentSource for CommunityDragonClient {
    async fn fetch_document(&self) -> Result<RawDocument, FetchError> {
        let bytes = self.fetch_bytes().await?;
        parse_document(&bytes)
    }
}

/// A document already on disk or in memory.
#[derive(Debug, Clone)]
pub struct BytesSource(pub Vec<u8>);

impl DocumentSource for BytesSource {
    async fn fetch_document(&self) -> Result<RawDocument, FetchError> {
        parse_document(&self.0)
    }
}
