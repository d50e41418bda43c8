use crate::download_client::DownloadClient;
use crate::logging::{progress_bar_style, spinner_style};
use crate::manifest::BuildManifest;
use crate::urls::url_file_name;
use anyhow::{Context, Result};
use futures_util::StreamExt;
use reqwest::{Client, Response, StatusCode};
use std::path::Path;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::instrument;
use tracing_indicatif::span_ext::IndicatifSpanExt;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {status}")]
    BadStatus { url: String, status: StatusCode },

    #[error("URL has no file name: {0}")]
    MissingFileName(String),
}

/// HTTP client for the ToDesktop download host.
///
/// Requests carry no timeout and are never retried: a stalled transfer blocks
/// until the process is stopped.
pub struct ToDesktopClient {
    client: Client,
}

impl ToDesktopClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("todesktop-dl/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status,
            }
            .into());
        }
        Ok(response)
    }
}

impl DownloadClient for ToDesktopClient {
    #[instrument(skip_all)]
    async fn fetch_manifest(&self, url: &str) -> Result<BuildManifest> {
        let name = url_file_name(url).unwrap_or_else(|_| url.to_string());
        let current_span = tracing::Span::current();
        current_span.pb_set_style(&spinner_style("{msg}")?);
        current_span.pb_set_message(&format!("Parsing JSON file: {name}..."));
        current_span.pb_set_finish_message(&format!("Parsing JSON file: {name}... Done"));

        let body = self
            .get(url)
            .await
            .with_context(|| format!("Failed to fetch JSON from {url}"))?
            .bytes()
            .await
            .with_context(|| format!("Failed to fetch JSON from {url}"))?;
        serde_json::from_slice(&body)
            .with_context(|| format!("Failed to parse build manifest from {url}"))
    }

    #[instrument(skip_all)]
    async fn download_file(&self, url: &str, path: &Path) -> Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| url.to_string());

        let response = self
            .get(url)
            .await
            .with_context(|| format!("Failed to download {url}"))?;

        let current_span = tracing::Span::current();
        match response.content_length() {
            Some(length) => {
                current_span.pb_set_style(&progress_bar_style()?);
                current_span.pb_set_length(length);
            }
            None => current_span.pb_set_style(&spinner_style("{msg} {bytes}")?),
        }
        current_span.pb_set_message(&format!("Downloading {name}..."));
        current_span.pb_set_finish_message(&format!("Downloading {name}... Complete!"));

        let mut file = tokio::fs::File::create(path)
            .await
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut downloaded = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.with_context(|| format!("Failed to download {url}"))?;
            file.write_all(&chunk)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            downloaded += chunk.len() as u64;
            current_span.pb_set_position(downloaded);
        }

        // Only report success once every byte has reached the file.
        file.flush()
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
