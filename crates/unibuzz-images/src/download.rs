//! Single-file downloads with per-item failure isolation.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;

use crate::error::DownloadError;

/// Downloads one locator to one file.
///
/// A failure is returned as a value for the caller to log and skip; it never
/// affects other downloads. No content-type or integrity validation is done.
pub struct Downloader {
    client: Client,
}

impl Downloader {
    /// Creates a `Downloader` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `locator` and writes the full body to `destination`, creating
    /// missing parent directories and overwriting any existing file.
    ///
    /// The body is read completely before anything touches the filesystem, so
    /// a failed transfer leaves no partial file behind.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// - [`DownloadError::Http`] on network failure or a body read error.
    /// - [`DownloadError::UnexpectedStatus`] on any non-2xx status.
    /// - [`DownloadError::Io`] if the directory or file cannot be written.
    pub async fn fetch(&self, locator: &str, destination: &Path) -> Result<u64, DownloadError> {
        let response = self.client.get(locator).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::UnexpectedStatus {
                status: status.as_u16(),
                url: locator.to_owned(),
            });
        }

        let bytes = response.bytes().await?;

        ensure_parent_dir(destination).await?;
        tokio::fs::write(destination, &bytes)
            .await
            .map_err(|e| DownloadError::Io {
                path: destination.display().to_string(),
                source: e,
            })?;

        Ok(bytes.len() as u64)
    }
}

async fn ensure_parent_dir(destination: &Path) -> Result<(), DownloadError> {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DownloadError::Io {
                path: parent.display().to_string(),
                source: e,
            }),
        _ => Ok(()),
    }
}
