//! HTTP server for the Comet documentation engine.
//!
//! This crate serves the JSON API consumed by documentation frontends:
//! - `GET /api/navigation`: navigation tree for a locale
//! - `GET /api/docs/{*slug}`: document with HTML and table of contents
//! - `GET /api/slugs`: every document slug, for static path generation
//! - `GET /api/config`: public site configuration
//!
//! # Quick Start
//!
//! ```no_run
//! use comet_config::Config;
//! use comet_server::run_server;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     run_server(&config, env!("CARGO_PKG_VERSION")).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum router (comet-server)
//!                       │
//!                       └─► spawn_blocking ──► Site (comet-site)
//!                                                  │
//!                                                  └─► Storage (comet-storage-fs)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use comet_config::Config;
use comet_site::{Site, SiteConfig};
use comet_storage::Storage;
use comet_storage_fs::FsStorage;

pub use error::ServerError;
use handlers::config::PublicConfig;
use state::AppState;

/// Run the server until Ctrl-C.
///
/// Content is read from `config.content.dir`; the listener binds to
/// `config.server.host` and `config.server.port`. `version` is mixed into
/// document `ETag`s so upgrades invalidate client caches.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot bind.
pub async fn run_server(config: &Config, version: &str) -> Result<(), Box<dyn std::error::Error>> {
    let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(config.content.dir.clone()));
    let site = Arc::new(Site::new(storage, SiteConfig::from(config)));

    let state = Arc::new(AppState {
        site,
        public_config: PublicConfig::from(config),
        version: version.to_owned(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.server.host, config.server.port))?;
    tracing::info!(
        address = %addr,
        content_dir = %config.content.dir.display(),
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
