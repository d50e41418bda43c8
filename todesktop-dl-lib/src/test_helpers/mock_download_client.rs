use crate::download_client::DownloadClient;
use crate::manifest::BuildManifest;
use anyhow::{Context, anyhow};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

/// Serves response bodies from memory. URLs without a body answer 404.
#[derive(Default)]
pub struct MockDownloadClient {
    bodies: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl MockDownloadClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }

    /// Every URL requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, url: &str) -> anyhow::Result<&[u8]> {
        self.requests.lock().unwrap().push(url.to_string());
        self.bodies
            .get(url)
            .map(|body| body.as_slice())
            .ok_or_else(|| anyhow!("Request to {url} failed: 404 Not Found"))
    }
}

impl DownloadClient for MockDownloadClient {
    async fn fetch_manifest(&self, url: &str) -> anyhow::Result<BuildManifest> {
        let body = self
            .respond(url)
            .with_context(|| format!("Failed to fetch JSON from {url}"))?;
        serde_json::from_slice(body)
            .with_context(|| format!("Failed to parse build manifest from {url}"))
    }

    async fn download_file(&self, url: &str, output_path: &Path) -> anyhow::Result<()> {
        let body = self
            .respond(url)
            .with_context(|| format!("Failed to download {url}"))?;
        fs::write(output_path, body)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        Ok(())
    }
}
