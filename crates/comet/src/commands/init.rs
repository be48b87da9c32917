//! `comet init` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use comet_config::CONFIG_FILENAME;

use crate::error::CliError;
use crate::output::Output;

const CONFIG_TEMPLATE: &str = r#"[content]
dir = "docs"
default_locale = "en"

[theme]
layout = "sidebar"
dark_mode = "system"

[navigation]
auto = true
title_case = true

[advanced]
base_path = "/docs"

[server]
host = "127.0.0.1"
port = 7979
"#;

const GETTING_STARTED: &str = "---
title: Getting Started
position: 1
---

# Getting Started

Welcome to your new documentation site.

## Next steps

Add Markdown files under `docs/en/`. Folders become sections; a
`section.json` file sets their title and position.
";

const GUIDES_SECTION: &str = r#"{
  "title": "Guides",
  "position": 2
}
"#;

const INSTALLATION: &str = "---
title: Installation
position: 1
---

# Installation

## Requirements

## Install
";

/// Files created by `comet init`, relative to the target directory.
const SCAFFOLD: [(&str, &str); 4] = [
    (CONFIG_FILENAME, CONFIG_TEMPLATE),
    ("docs/en/getting-started.md", GETTING_STARTED),
    ("docs/en/guides/section.json", GUIDES_SECTION),
    ("docs/en/guides/installation.md", INSTALLATION),
];

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Target directory.
    #[arg(default_value = ".")]
    dir: PathBuf,
}

impl InitArgs {
    /// Scaffold the project, skipping files that already exist.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        for (path, created) in scaffold(&self.dir)? {
            let display = path.display();
            if created {
                output.success(&format!("Created {display}"));
            } else {
                output.warning(&format!("Skipped {display} (already exists)"));
            }
        }
        output.info("Run `comet serve` to start the server.");
        Ok(())
    }
}

/// Write the scaffold files under `dir`.
///
/// Returns each path with whether it was created. Existing files are never
/// overwritten.
fn scaffold(dir: &Path) -> Result<Vec<(PathBuf, bool)>, CliError> {
    let mut results = Vec::with_capacity(SCAFFOLD.len());
    for (rel, content) in SCAFFOLD {
        let path = dir.join(rel);
        if path.exists() {
            tracing::debug!(path = %path.display(), "Keeping existing file");
            results.push((path, false));
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        results.push((path, true));
    }
    Ok(results)
}
