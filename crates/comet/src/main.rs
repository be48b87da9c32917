//! Comet CLI - Documentation engine.
//!
//! Provides commands for:
//! - `serve`: Start the documentation API server
//! - `nav`: Print the navigation tree as JSON
//! - `slugs`: Print every document slug
//! - `init`: Scaffold a new documentation project

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{InitArgs, NavArgs, ServeArgs, SlugsArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Comet - Documentation engine.
#[derive(Parser)]
#[command(name = "comet", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation API server.
    Serve(ServeArgs),
    /// Print the navigation tree as JSON.
    Nav(NavArgs),
    /// Print every document slug, one per line.
    Slugs(SlugsArgs),
    /// Scaffold a new documentation project.
    Init(InitArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Nav(args) => args.execute(&output),
        Commands::Slugs(args) => args.execute(&output),
        Commands::Init(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
