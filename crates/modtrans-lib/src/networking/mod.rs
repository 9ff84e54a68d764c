//! HTTP access for the catalog and translation downloads

use reqwest::{Client, StatusCode, Url};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

pub mod download;

pub use download::{DownloadedPair, download_pair, file_name_from_url};

/// Boxed future used by the object-safe provider traits
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Networking errors for catalog fetches and downloads
#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("HTTP error! status: {status} ({url})")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to save '{path}': {reason}")]
    SaveFailed { path: String, reason: String },
}

/// HTTP client settings
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("modtrans/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Object-safe HTTP operations the rest of the crate depends on
pub trait NetworkProvider: Send + Sync {
    /// GET a text body, failing on non-2xx
    fn fetch_text<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, NetworkingError>>;

    /// GET a binary body, failing on non-2xx
    fn fetch_bytes<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, NetworkingError>>;
}

/// `catalog_url` with the cache-busting `t` parameter appended
pub fn catalog_request_url(catalog_url: &str, now_millis: u64) -> Result<Url, NetworkingError> {
    let mut url = Url::parse(catalog_url).map_err(|e| NetworkingError::InvalidUrl {
        url: catalog_url.to_string(),
        reason: e.to_string(),
    })?;
    url.query_pairs_mut()
        .append_pair("t", &now_millis.to_string());
    Ok(url)
}

/// reqwest-backed provider
#[derive(Debug, Clone)]
pub struct LiveNetworkProvider {
    client: Client,
}

impl LiveNetworkProvider {
    pub fn new(config: &NetworkingConfig) -> Result<Self, NetworkingError> {
        trace!(
            timeout = config.timeout_seconds,
            "Building HTTP client"
        );
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    async fn get_checked(&self, url: &str) -> Result<reqwest::Response, NetworkingError> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(http_status_error(url, status));
        }
        Ok(response)
    }
}

fn http_status_error(url: &str, status: StatusCode) -> NetworkingError {
    NetworkingError::HttpStatus {
        url: url.to_string(),
        status: status.as_u16(),
    }
}

impl NetworkProvider for LiveNetworkProvider {
    fn fetch_text<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, NetworkingError>> {
        Box::pin(async move {
            let response = self.get_checked(url).await?;
            Ok(response.text().await?)
        })
    }

    fn fetch_bytes<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, NetworkingError>> {
        Box::pin(async move {
            let response = self.get_checked(url).await?;
            Ok(response.bytes().await?.to_vec())
        })
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
