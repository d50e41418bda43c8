use crate::config::Config;
use crate::manifest::{ArtifactCategory, Asset};
use crate::urls::{planned_file_name, url_file_name};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory shared by the `nsis-web` and `nsis-web-7z` artifacts.
pub const WEB_INSTALLER_DIR: &str = "nsis-web";

/// Creates `<downloads_root>/<appId>/<buildId>` if needed and returns it.
pub fn create_download_dir(config: &Config, app_id: &str, build_id: &str) -> Result<PathBuf> {
    let download_dir = config.download_dir(app_id, build_id);
    fs::create_dir_all(&download_dir).with_context(|| {
        format!(
            "Failed to create download directory {}",
            download_dir.display()
        )
    })?;
    Ok(download_dir)
}

/// Where an installer from a manifest is written.
/// Assets sharing a file name overwrite each other.
pub fn destination_path(download_dir: &Path, asset: &Asset) -> Result<PathBuf> {
    let file_name = url_file_name(&asset.url)?;
    let is_web_installer = asset
        .category
        .parse::<ArtifactCategory>()
        .is_ok_and(|category| category.is_web_installer());

    if is_web_installer {
        let sub_dir = download_dir.join(WEB_INSTALLER_DIR);
        fs::create_dir_all(&sub_dir)
            .with_context(|| format!("Failed to create directory {}", sub_dir.display()))?;
        return Ok(sub_dir.join(file_name));
    }

    Ok(download_dir.join(file_name))
}

/// Manifests and update metadata are stored next to the installers, named
/// after the planned URL without any percent-decoding or re-encoding.
pub fn remote_file_destination(download_dir: &Path, url: &str) -> Result<PathBuf> {
    Ok(download_dir.join(planned_file_name(url)?))
}
