//! Navigation resolution and document loading for Comet.
//!
//! This crate provides:
//! - [`build_navigation`]: the directory-to-tree resolver
//! - [`load_document`]: slug lookup with frontmatter, HTML and table of contents
//! - [`list_slugs`]: every document slug of a locale, for static path generation
//! - [`active_trail`] and [`breadcrumbs`]: current-path state over a tree
//! - [`Site`]: the facade every trigger point (HTTP API, CLI) goes through
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use comet_config::Config;
//! use comet_site::{Site, SiteConfig};
//! use comet_storage_fs::FsStorage;
//!
//! let config = Config::default();
//! let storage = Arc::new(FsStorage::new(PathBuf::from("docs")));
//! let site = Site::new(storage, SiteConfig::from(&config));
//!
//! let nav = site.navigation(None, None);
//! let doc = site.document(None, "getting-started");
//! ```

mod active;
mod document;
mod nav;
mod paths;
mod render;
mod resolver;
mod site;
mod slugs;
mod toc;

pub use active::{Breadcrumb, active_trail, breadcrumbs};
pub use document::{Doc, DocMetadata, load_document};
pub use nav::{NavItem, compare_siblings, sort_siblings};
pub use paths::normalize_base_path;
pub use render::render_markdown;
pub use resolver::{ResolverOptions, build_navigation};
pub use site::{Site, SiteConfig, SiteError};
pub use slugs::list_slugs;
pub use toc::{TableOfContents, TocItem, generate_table_of_contents, slugify};
