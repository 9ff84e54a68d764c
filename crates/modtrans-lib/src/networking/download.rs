//! Mod jar + translation JSON download

use super::{NetworkProvider, NetworkingError};
use crate::application::session::FileSystemProvider;
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Used when a URL has no usable trailing segment
pub const FALLBACK_FILE_NAME: &str = "download.bin";

/// Where the two files of a pair were saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedPair {
    pub jar_path: PathBuf,
    pub json_path: PathBuf,
}

/// Trailing path segment of `url`, without query or fragment
pub fn file_name_from_url(url: &str) -> String {
    let segment = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back().map(str::to_string)),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .map(str::to_string),
    };

    segment
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}

async fn fetch_and_save(
    network: &dyn NetworkProvider,
    filesystem: &dyn FileSystemProvider,
    url: &str,
    output_dir: &Path,
) -> Result<PathBuf, NetworkingError> {
    let bytes = network.fetch_bytes(url).await?;
    let path = output_dir.join(file_name_from_url(url));

    filesystem
        .write_bytes(&path, &bytes)
        .map_err(|e| NetworkingError::SaveFailed {
            path: path.display().to_string(),
            reason: format!("{e:#}"),
        })?;

    debug!(url, path = %path.display(), size = bytes.len(), "Saved download");
    Ok(path)
}

/// Downloads the jar, waits `delay`, then downloads the translation
///
/// Stops at the first failure; a jar already saved stays on disk.
pub async fn download_pair(
    network: &dyn NetworkProvider,
    filesystem: &dyn FileSystemProvider,
    jar_url: &str,
    json_url: &str,
    output_dir: &Path,
    delay: Duration,
) -> Result<DownloadedPair, NetworkingError> {
    let jar_path = fetch_and_save(network, filesystem, jar_url, output_dir).await?;

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let json_path = fetch_and_save(network, filesystem, json_url, output_dir).await?;

    info!(
        jar = %jar_path.display(),
        json = %json_path.display(),
        "Downloaded translation pair"
    );

    Ok(DownloadedPair {
        jar_path,
        json_path,
    })
}

#[cfg(test)]
mod tests {
    include!("download.test.rs");
}
