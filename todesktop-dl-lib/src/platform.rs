use crate::manifest::Asset;

/// Platforms requested on the command line. With no flag set nothing is filtered out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformFilter {
    pub mac: bool,
    pub linux: bool,
    pub windows: bool,
}

impl PlatformFilter {
    pub fn new(mac: bool, linux: bool, windows: bool) -> Self {
        Self {
            mac,
            linux,
            windows,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.mac || self.linux || self.windows)
    }

    /// Policy for the planned manifest and metadata URLs.
    ///
    /// Matching is case-sensitive, and Windows owns every URL that names neither
    /// mac nor linux, since its files carry no platform infix.
    pub fn matches_remote_file(&self, url: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let is_mac = url.contains("mac");
        let is_linux = url.contains("linux");
        (self.mac && is_mac) || (self.linux && is_linux) || (self.windows && !is_mac && !is_linux)
    }

    /// Policy for installer URLs extracted from a manifest.
    ///
    /// Matching is case-insensitive, and Windows only takes `.exe` installers.
    pub fn matches_asset(&self, asset: &Asset) -> bool {
        if self.is_empty() {
            return true;
        }
        let url = asset.url.to_lowercase();
        (self.mac && url.contains("mac"))
            || (self.linux && url.contains("linux"))
            || (self.windows && url.ends_with(".exe"))
    }

    pub fn filter_remote_files(&self, urls: Vec<String>) -> Vec<String> {
        urls.into_iter()
            .filter(|url| self.matches_remote_file(url))
            .collect()
    }

    pub fn filter_assets(&self, assets: Vec<Asset>) -> Vec<Asset> {
        assets
            .into_iter()
            .filter(|asset| self.matches_asset(asset))
            .collect()
    }
}
