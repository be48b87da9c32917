//! Configuration sections and their defaults.
//!
//! Field names follow `comet.toml` (snake case). Types that are exposed over
//! HTTP serialize in camel case.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Content source configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Content root containing one directory per locale.
    pub dir: PathBuf,
    /// Locale used when a request does not name one.
    pub default_locale: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs"),
            default_locale: "en".to_owned(),
        }
    }
}

/// Page layout variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Sidebar,
    Full,
    Minimal,
}

/// Dark mode behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    #[default]
    System,
    Light,
    Dark,
    Toggle,
}

/// Theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#3490dc".to_owned(),
            secondary: "#718096".to_owned(),
            accent: "#f6ad55".to_owned(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Inherit styling from the host application.
    pub inherit: bool,
    pub layout: Layout,
    pub dark_mode: DarkMode,
    pub colors: ThemeColors,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            inherit: true,
            layout: Layout::default(),
            dark_mode: DarkMode::default(),
            colors: ThemeColors::default(),
        }
    }
}

/// Manually configured navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavEntry>,
}

/// Navigation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Derive navigation from the content tree.
    pub auto: bool,
    /// Manual entries; when non-empty they replace the derived tree.
    pub items: Vec<NavEntry>,
    /// Title-case names derived from files and folders.
    pub title_case: bool,
    /// Emit folders that have section metadata but no children.
    pub keep_empty_sections: bool,
    /// Name of the per-folder metadata file.
    pub section_file: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            auto: true,
            items: Vec::new(),
            title_case: false,
            keep_empty_sections: false,
            section_file: "section.json".to_owned(),
        }
    }
}

/// Search backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Local,
    Algolia,
}

/// Algolia credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgoliaConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub enabled: bool,
    pub search_type: SearchType,
    pub algolia: AlgoliaConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            search_type: SearchType::default(),
            algolia: AlgoliaConfig::default(),
        }
    }
}

/// Advanced options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedConfig {
    /// URL prefix for every documentation path.
    pub base_path: String,
    pub code_highlighting: bool,
    pub search: SearchConfig,
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            base_path: "/docs".to_owned(),
            code_highlighting: true,
            search: SearchConfig::default(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}
