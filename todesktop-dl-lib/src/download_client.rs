use crate::manifest::BuildManifest;
use anyhow::Result;
use std::path::Path;

pub trait DownloadClient {
    fn fetch_manifest(&self, url: &str) -> impl Future<Output = Result<BuildManifest>> + Send;

    fn download_file(&self, url: &str, output_path: &Path)
    -> impl Future<Output = Result<()>> + Send;
}
