//! Configuration management for Comet.
//!
//! Parses `comet.toml` configuration files and provides auto-discovery of
//! config files in parent directories. The file is read as a partial
//! configuration and merged over [`Config::default`]: nested tables merge
//! recursively, scalars and arrays replace.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `advanced.search.algolia.app_id`
//! - `advanced.search.algolia.api_key`
//! - `advanced.search.algolia.index_name`

mod expand;
mod partial;
mod schema;

use std::path::{Path, PathBuf};

pub use schema::{
    AdvancedConfig, AlgoliaConfig, ContentConfig, DarkMode, Layout, NavEntry, NavigationConfig,
    SearchConfig, SearchType, ServerConfig, ThemeColors, ThemeConfig,
};

use partial::PartialConfig;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "comet.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override content directory.
    pub content_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub content: ContentConfig,
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub advanced: AdvancedConfig,
    pub server: ServerConfig,
    /// Path to the config file (set after loading).
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`COMET_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a value usable as a single path segment.
fn require_segment(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if value.contains('/') || value.contains('\\') || value == "." || value == ".." {
        return Err(ConfigError::Validation(format!(
            "{field} must be a single path segment"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `comet.toml` in current directory and parents.
    /// Without any file, defaults are resolved against the current directory.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// an environment reference cannot be expanded, or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse TOML content and merge it over the defaults.
    ///
    /// Paths are left as written and environment references unexpanded.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown enum values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let partial: PartialConfig = toml::from_str(content)?;
        let mut config = Self::default();
        partial.merge_into(&mut config);
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(content_dir) = &settings.content_dir {
            self.content.dir.clone_from(content_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self::default();
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_content()?;
        self.validate_advanced()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        require_segment(&self.content.default_locale, "content.default_locale")?;
        require_segment(&self.navigation.section_file, "navigation.section_file")?;
        Ok(())
    }

    fn validate_advanced(&self) -> Result<(), ConfigError> {
        let base_path = &self.advanced.base_path;
        if !base_path.is_empty() && !base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "advanced.base_path must be empty or start with /".to_owned(),
            ));
        }

        let search = &self.advanced.search;
        if search.enabled && search.search_type == SearchType::Algolia {
            require_non_empty(&search.algolia.app_id, "advanced.search.algolia.app_id")?;
            require_non_empty(&search.algolia.api_key, "advanced.search.algolia.api_key")?;
            require_non_empty(
                &search.algolia.index_name,
                "advanced.search.algolia.index_name",
            )?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        let algolia = &mut self.advanced.search.algolia;
        algolia.app_id = expand::expand_env(&algolia.app_id, "advanced.search.algolia.app_id")?;
        algolia.api_key = expand::expand_env(&algolia.api_key, "advanced.search.algolia.api_key")?;
        algolia.index_name =
            expand::expand_env(&algolia.index_name, "advanced.search.algolia.index_name")?;

        Ok(())
    }

    /// Resolve a relative content directory against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        if self.content.dir.is_relative() {
            self.content.dir = config_dir.join(&self.content.dir);
        }
    }
}
