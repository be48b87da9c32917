//! Site facade.
//!
//! [`Site`] ties a [`Storage`] backend to the navigation settings and is the
//! single entry point for the HTTP API and the CLI. It holds no mutable state;
//! every call performs its own walk, so one instance can be shared via `Arc`
//! across threads.

use std::sync::Arc;

use comet_config::{Config, NavEntry};
use comet_storage::{Storage, StorageError};

use crate::active::{Breadcrumb, breadcrumbs};
use crate::document::{Doc, load_document};
use crate::nav::NavItem;
use crate::resolver::{ResolverOptions, build_navigation};
use crate::slugs::list_slugs;

/// Error returned by [`Site`] operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Storage backend failure other than a missing file.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Configuration for [`Site`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Locale used when a call passes `None`.
    pub default_locale: String,
    /// Base path used when a call passes `None`.
    pub base_path: String,
    /// Derive navigation from the content tree.
    pub auto: bool,
    /// Manual navigation entries.
    pub items: Vec<NavEntry>,
    pub resolver: ResolverOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SiteConfig {
    fn from(config: &Config) -> Self {
        Self {
            default_locale: config.content.default_locale.clone(),
            base_path: config.advanced.base_path.clone(),
            auto: config.navigation.auto,
            items: config.navigation.items.clone(),
            resolver: ResolverOptions::from(&config.navigation),
        }
    }
}

/// Documentation site over a storage backend.
pub struct Site {
    storage: Arc<dyn Storage>,
    config: SiteConfig,
}

impl Site {
    /// Create a site.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: SiteConfig) -> Self {
        Self { storage, config }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn locale<'a>(&'a self, locale: Option<&'a str>) -> &'a str {
        locale.unwrap_or(&self.config.default_locale)
    }

    /// Navigation tree for a locale.
    ///
    /// Configured items are returned as-is when automatic navigation is off
    /// or when any are configured; otherwise the tree is resolved from the
    /// content directory.
    #[must_use]
    pub fn navigation(&self, locale: Option<&str>, base_path: Option<&str>) -> Vec<NavItem> {
        if !self.config.auto || !self.config.items.is_empty() {
            return self.config.items.iter().map(NavItem::from).collect();
        }

        let locale = self.locale(locale);
        let base_path = base_path.unwrap_or(&self.config.base_path);
        tracing::debug!(locale = %locale, base_path = %base_path, "Resolving navigation");
        build_navigation(
            self.storage.as_ref(),
            locale,
            base_path,
            &self.config.resolver,
        )
    }

    /// Load a document by slug.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when the document exists but cannot be
    /// read.
    pub fn document(&self, locale: Option<&str>, slug: &str) -> Result<Option<Doc>, SiteError> {
        load_document(
            self.storage.as_ref(),
            self.locale(locale),
            slug,
            self.config.resolver.title_case,
        )
    }

    /// Every document slug of a locale.
    #[must_use]
    pub fn slugs(&self, locale: Option<&str>) -> Vec<String> {
        list_slugs(self.storage.as_ref(), self.locale(locale))
    }

    /// Breadcrumbs for a navigation path, using the configured base path.
    #[must_use]
    pub fn breadcrumbs(&self, locale: Option<&str>, path: &str) -> Vec<Breadcrumb> {
        breadcrumbs(&self.navigation(locale, None), path)
    }
}
