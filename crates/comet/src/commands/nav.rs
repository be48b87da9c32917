//! `comet nav` command implementation.

use clap::Args;

use crate::commands::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Locale directory (default: content.default_locale).
    #[arg(short, long)]
    locale: Option<String>,

    /// Path prefix for links (default: advanced.base_path).
    #[arg(long)]
    base_path: Option<String>,
}

impl NavArgs {
    /// Print the navigation tree as pretty JSON on stdout.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.site.open()?;
        let items = site.navigation(self.locale.as_deref(), self.base_path.as_deref());
        if items.is_empty() {
            output.warning("Navigation is empty");
        }
        output.data(&serde_json::to_string_pretty(&items)?)?;
        Ok(())
    }
}
