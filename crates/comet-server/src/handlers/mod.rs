//! HTTP request handlers.

pub(crate) mod config;
pub(crate) mod docs;
pub(crate) mod navigation;
pub(crate) mod slugs;

use serde::Deserialize;

/// `?locale=` query shared by the content endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    pub(crate) locale: Option<String>,
}
