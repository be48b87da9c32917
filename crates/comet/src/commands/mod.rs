//! CLI command implementations.

pub(crate) mod init;
pub(crate) mod nav;
pub(crate) mod serve;
pub(crate) mod slugs;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use comet_config::{CliSettings, Config};
use comet_site::{Site, SiteConfig};
use comet_storage_fs::FsStorage;

use crate::error::CliError;

pub(crate) use init::InitArgs;
pub(crate) use nav::NavArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use slugs::SlugsArgs;

/// Config and content location shared by the offline commands.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover comet.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,
}

impl SiteArgs {
    /// Load the configuration and open the site over the content directory.
    pub(crate) fn open(self) -> Result<Site, CliError> {
        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(content_dir = %config.content.dir.display(), "Opening site");

        let storage = Arc::new(FsStorage::new(config.content.dir.clone()));
        Ok(Site::new(storage, SiteConfig::from(&config)))
    }
}
