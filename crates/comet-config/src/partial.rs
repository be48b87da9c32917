//! Partial configuration as written in `comet.toml`.
//!
//! Every field is optional. [`PartialConfig::merge_into`] overlays the file
//! over defaults: nested tables merge recursively, scalars and arrays replace
//! wholesale.

use std::path::PathBuf;

use serde::Deserialize;

use crate::Config;
use crate::schema::{
    AdvancedConfig, AlgoliaConfig, ContentConfig, DarkMode, Layout, NavEntry, NavigationConfig,
    SearchConfig, SearchType, ThemeColors, ThemeConfig,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PartialConfig {
    content: Option<PartialContent>,
    theme: Option<PartialTheme>,
    navigation: Option<PartialNavigation>,
    advanced: Option<PartialAdvanced>,
    server: Option<PartialServer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialContent {
    dir: Option<String>,
    default_locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialTheme {
    inherit: Option<bool>,
    layout: Option<Layout>,
    dark_mode: Option<DarkMode>,
    colors: Option<PartialColors>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialColors {
    primary: Option<String>,
    secondary: Option<String>,
    accent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialNavigation {
    auto: Option<bool>,
    items: Option<Vec<NavEntry>>,
    title_case: Option<bool>,
    keep_empty_sections: Option<bool>,
    section_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialAdvanced {
    base_path: Option<String>,
    code_highlighting: Option<bool>,
    search: Option<PartialSearch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialSearch {
    enabled: Option<bool>,
    #[serde(rename = "type")]
    search_type: Option<SearchType>,
    algolia: Option<PartialAlgolia>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialAlgolia {
    app_id: Option<String>,
    api_key: Option<String>,
    index_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialServer {
    host: Option<String>,
    port: Option<u16>,
}

/// Replace `target` when `value` is set.
fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl PartialConfig {
    pub(crate) fn merge_into(self, config: &mut Config) {
        if let Some(content) = self.content {
            content.merge_into(&mut config.content);
        }
        if let Some(theme) = self.theme {
            theme.merge_into(&mut config.theme);
        }
        if let Some(navigation) = self.navigation {
            navigation.merge_into(&mut config.navigation);
        }
        if let Some(advanced) = self.advanced {
            advanced.merge_into(&mut config.advanced);
        }
        if let Some(server) = self.server {
            set(&mut config.server.host, server.host);
            set(&mut config.server.port, server.port);
        }
    }
}

impl PartialContent {
    fn merge_into(self, content: &mut ContentConfig) {
        set(&mut content.dir, self.dir.map(PathBuf::from));
        set(&mut content.default_locale, self.default_locale);
    }
}

impl PartialTheme {
    fn merge_into(self, theme: &mut ThemeConfig) {
        set(&mut theme.inherit, self.inherit);
        set(&mut theme.layout, self.layout);
        set(&mut theme.dark_mode, self.dark_mode);
        if let Some(colors) = self.colors {
            colors.merge_into(&mut theme.colors);
        }
    }
}

impl PartialColors {
    fn merge_into(self, colors: &mut ThemeColors) {
        set(&mut colors.primary, self.primary);
        set(&mut colors.secondary, self.secondary);
        set(&mut colors.accent, self.accent);
    }
}

impl PartialNavigation {
    fn merge_into(self, navigation: &mut NavigationConfig) {
        set(&mut navigation.auto, self.auto);
        set(&mut navigation.items, self.items);
        set(&mut navigation.title_case, self.title_case);
        set(&mut navigation.keep_empty_sections, self.keep_empty_sections);
        set(&mut navigation.section_file, self.section_file);
    }
}

impl PartialAdvanced {
    fn merge_into(self, advanced: &mut AdvancedConfig) {
        set(&mut advanced.base_path, self.base_path);
        set(&mut advanced.code_highlighting, self.code_highlighting);
        if let Some(search) = self.search {
            search.merge_into(&mut advanced.search);
        }
    }
}

impl PartialSearch {
    fn merge_into(self, search: &mut SearchConfig) {
        set(&mut search.enabled, self.enabled);
        set(&mut search.search_type, self.search_type);
        if let Some(algolia) = self.algolia {
            algolia.merge_into(&mut search.algolia);
        }
    }
}

impl PartialAlgolia {
    fn merge_into(self, algolia: &mut AlgoliaConfig) {
        set(&mut algolia.app_id, self.app_id);
        set(&mut algolia.api_key, self.api_key);
        set(&mut algolia.index_name, self.index_name);
    }
}
