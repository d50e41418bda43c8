use anyhow::Result;
use clap::Parser;

use crate::commands::download::DownloadCommand;

#[derive(Parser)]
#[command(name = "todesktop-dl")]
#[command(about = "Download the installers and update metadata of a ToDesktop build")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub download: DownloadCommand,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        self.download.run().await
    }
}
