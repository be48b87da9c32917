//! `comet slugs` command implementation.

use clap::Args;

use crate::commands::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the slugs command.
#[derive(Args)]
pub(crate) struct SlugsArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Locale directory (default: content.default_locale).
    #[arg(short, long)]
    locale: Option<String>,
}

impl SlugsArgs {
    /// Print one slug per line; the root document prints as `/`.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.site.open()?;
        for slug in site.slugs(self.locale.as_deref()) {
            output.data(&format!("/{slug}"))?;
        }
        Ok(())
    }
}
