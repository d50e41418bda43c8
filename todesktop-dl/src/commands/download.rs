use crate::ui;
use anyhow::Result;
use clap::Args;
use todesktop_dl_lib::config::{Config, DEFAULT_BASE_URL};
use todesktop_dl_lib::pipeline::{self, DownloadRequest};
use todesktop_dl_lib::platform::PlatformFilter;
use todesktop_dl_lib::todesktop::ToDesktopClient;

#[derive(Args)]
pub struct DownloadCommand {
    /// Application ID
    #[arg(long = "appId")]
    pub app_id: String,

    /// Build ID
    #[arg(long = "buildId")]
    pub build_id: String,

    /// Download Mac assets
    #[arg(long)]
    pub mac: bool,

    /// Download Linux assets
    #[arg(long)]
    pub linux: bool,

    /// Download Windows assets
    #[arg(long)]
    pub windows: bool,

    /// Download host (useful for testing against a local mirror)
    #[arg(long, hide = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl DownloadCommand {
    pub fn request(&self) -> DownloadRequest {
        DownloadRequest {
            app_id: self.app_id.clone(),
            build_id: self.build_id.clone(),
            platforms: PlatformFilter::new(self.mac, self.linux, self.windows),
        }
    }

    pub async fn run(self) -> Result<()> {
        let config = Config::setup(None)?.with_base_url(&self.base_url);
        let client = ToDesktopClient::new()?;
        let request = self.request();

        if request.platforms.is_empty() {
            ui::info("No platform selected, downloading assets for every platform.");
        }

        match pipeline::run(&config, &request, &client).await {
            Ok(summary) => {
                ui::success(&format!(
                    "{} files saved to {}",
                    summary.total_files(),
                    summary.download_dir.display()
                ));
                ui::done("All downloads completed successfully!");
                Ok(())
            }
            Err(e) => {
                ui::error("An error occurred during the download process.");
                Err(e)
            }
        }
    }
}
