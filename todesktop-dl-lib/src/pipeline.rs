use crate::config::Config;
use crate::download_client::DownloadClient;
use crate::layout::{create_download_dir, destination_path, remote_file_destination};
use crate::platform::PlatformFilter;
use crate::urls::{manifest_urls, metadata_urls};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// What to download: one build of one application, optionally narrowed to some platforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub app_id: String,
    pub build_id: String,
    pub platforms: PlatformFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub download_dir: PathBuf,
    pub manifests: usize,
    pub assets: usize,
    pub metadata_files: usize,
}

impl DownloadSummary {
    pub fn total_files(&self) -> usize {
        self.manifests + self.assets + self.metadata_files
    }
}

/// Downloads a build into `<downloads_root>/<appId>/<buildId>`.
///
/// Every step runs to completion before the next one starts, and the first
/// failure aborts the run. Files already written are left in place.
pub async fn run<D: DownloadClient>(
    config: &Config,
    request: &DownloadRequest,
    client: &D,
) -> Result<DownloadSummary> {
    let platforms = request.platforms;

    // 1. Provision the output directory
    let download_dir = create_download_dir(config, &request.app_id, &request.build_id)?;
    tracing::info!(
        "{} {}",
        "✓".green(),
        format!("Download directory created at {}", download_dir.display()).green()
    );

    let mut summary = DownloadSummary {
        download_dir: download_dir.clone(),
        ..Default::default()
    };

    // 2. Keep a copy of each manifest
    let manifests = platforms.filter_remote_files(manifest_urls(
        &config.base_url,
        &request.app_id,
        &request.build_id,
    ));
    for url in &manifests {
        let dest = remote_file_destination(&download_dir, url)?;
        client.download_file(url, &dest).await?;
        summary.manifests += 1;
        log_downloaded(&dest);
    }

    // 3. Fetch the installers each manifest lists
    for url in &manifests {
        let manifest = client.fetch_manifest(url).await?;
        let assets = platforms.filter_assets(manifest.assets());
        tracing::debug!("{} lists {} matching assets", url, assets.len());

        for asset in &assets {
            let dest = destination_path(&download_dir, asset)?;
            client.download_file(&asset.url, &dest).await?;
            summary.assets += 1;
            log_downloaded(&dest);
        }
    }

    // 4. Auto-update metadata
    let metadata = platforms.filter_remote_files(metadata_urls(
        &config.base_url,
        &request.app_id,
        &request.build_id,
    ));
    for url in &metadata {
        let dest = remote_file_destination(&download_dir, url)?;
        client.download_file(url, &dest).await?;
        summary.metadata_files += 1;
        log_downloaded(&dest);
    }

    Ok(summary)
}

fn log_downloaded(path: &Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    tracing::info!("{} {}", "✓".green(), format!("Downloaded {name}").green());
}
