use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Host serving ToDesktop build manifests and installers.
pub const DEFAULT_BASE_URL: &str = "https://download.todesktop.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Remote host every manifest, installer and metadata URL is derived from
    pub base_url: String,

    /// Directory under which `<appId>/<buildId>` download trees are created
    pub downloads_root: PathBuf,
}

impl Config {
    pub fn new_for_path(root: &Path) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            downloads_root: root.join("downloads"),
        }
    }

    /// Sets up a new Config rooted at `root`, or at the current working directory.
    pub fn setup(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir().context("Failed to resolve the working directory")?,
        };
        Ok(Self::new_for_path(&root))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Local directory for one build: `<downloads_root>/<appId>/<buildId>`.
    pub fn download_dir(&self, app_id: &str, build_id: &str) -> PathBuf {
        self.downloads_root.join(app_id).join(build_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_dir_layout() {
        let config = Config::new_for_path(Path::new("/work"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.download_dir("acme", "42"),
            Path::new("/work").join("downloads").join("acme").join("42")
        );
    }

    #[test]
    fn test_setup_defaults_to_current_dir() -> Result<()> {
        let config = Config::setup(None)?;
        assert_eq!(config.downloads_root, std::env::current_dir()?.join("downloads"));
        Ok(())
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::new_for_path(Path::new("/work")).with_base_url("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
