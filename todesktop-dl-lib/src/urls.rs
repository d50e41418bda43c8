use anyhow::{Context, Result};
use reqwest::Url;

use crate::todesktop::FetchError;

/// Platform infixes in the order the remote files are planned: generic (Windows), linux, mac.
const PLATFORM_INFIXES: [&str; 3] = ["", "linux-", "mac-"];

pub fn app_base_url(base_url: &str, app_id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), app_id)
}

/// The three build manifests, `td-latest[-<platform>]-build-<buildId>.json`.
pub fn manifest_urls(base_url: &str, app_id: &str, build_id: &str) -> Vec<String> {
    let base = app_base_url(base_url, app_id);
    PLATFORM_INFIXES
        .iter()
        .map(|infix| format!("{base}/td-latest-{infix}build-{build_id}.json"))
        .collect()
}

/// The three auto-update metadata files, `latest[-<platform>]-build-<buildId>.yml`.
pub fn metadata_urls(base_url: &str, app_id: &str, build_id: &str) -> Vec<String> {
    let base = app_base_url(base_url, app_id);
    PLATFORM_INFIXES
        .iter()
        .map(|infix| format!("{base}/latest-{infix}build-{build_id}.yml"))
        .collect()
}

/// Last segment of the URL's path, ignoring any query string, fragment or
/// trailing slashes. The segment keeps its percent-encoding.
pub fn url_file_name(url: &str) -> Result<String> {
    let parsed = Url::parse(url).with_context(|| format!("Invalid URL: {url}"))?;
    parsed
        .path_segments()
        .and_then(|segments| segments.filter(|name| !name.is_empty()).next_back())
        .map(|name| name.to_string())
        .ok_or_else(|| FetchError::MissingFileName(url.to_string()).into())
}

/// Name of a planned manifest or metadata file: the raw text after the last
/// `/`, so identifiers appear in the file name exactly as given.
pub fn planned_file_name(url: &str) -> Result<String> {
    url.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .ok_or_else(|| FetchError::MissingFileName(url.to_string()).into())
}
