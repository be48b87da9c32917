//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use comet_site::Site;

use crate::handlers::config::PublicConfig;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site facade for navigation and documents.
    pub(crate) site: Arc<Site>,
    /// Client-visible configuration, computed once at startup.
    pub(crate) public_config: PublicConfig,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
