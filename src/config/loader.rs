//! Configuration file loading with precedence handling.

use super::Secret;
use crate::catalog::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_LANGUAGE};
use crate::trending::{AppwriteConfig, DEFAULT_TRENDING_LIMIT};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Default debounce quiet period in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting required by the selected trending backend is missing.
    #[error("Missing required setting [{section}] {field}")]
    MissingField {
        /// Config section name.
        section: &'static str,
        /// Field name within the section.
        field: &'static str,
    },

    /// A setting has a value outside its domain.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name (config key or env var).
        field: String,
        /// What was wrong.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/reelseek/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Movie catalog connection.
    #[serde(default)]
    pub catalog: Option<CatalogSection>,

    /// Search input behavior.
    #[serde(default)]
    pub search: Option<SearchSection>,

    /// Trending searches storage.
    #[serde(default)]
    pub trending: Option<TrendingSection>,
}

/// `[catalog]` section.
///
/// ```toml
/// [catalog]
/// base_url = "https://api.themoviedb.org/3"
/// api_token = "eyJhbGciOi..."
/// language = "en-US"
/// request_timeout_secs = 10
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CatalogSection {
    /// API root URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Bearer token for the catalog API.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Language tag for discover requests.
    #[serde(default)]
    pub language: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Poster image root URL.
    #[serde(default)]
    pub image_base_url: Option<String>,
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    /// Quiet period before typed input triggers a fetch.
    #[serde(default)]
    pub debounce_ms: Option<u64>,
    /// Query to start with.
    #[serde(default)]
    pub initial_query: Option<String>,
}

/// Which trending store to use.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendingBackendKind {
    /// Hosted document database over HTTP.
    Appwrite,
    /// Embedded database file on this machine.
    Local,
    /// No trending at all.
    Disabled,
}

impl FromStr for TrendingBackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "appwrite" => Ok(Self::Appwrite),
            "local" => Ok(Self::Local),
            "disabled" | "off" | "none" => Ok(Self::Disabled),
            other => Err(ConfigError::InvalidValue {
                field: "trending.backend".to_string(),
                reason: format!("unknown backend {other:?} (expected appwrite, local or disabled)"),
            }),
        }
    }
}

/// `[trending]` section.
///
/// ```toml
/// [trending]
/// backend = "appwrite"
/// limit = 5
/// endpoint = "https://cloud.appwrite.io/v1"
/// project_id = "..."
/// database_id = "..."
/// collection_id = "..."
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct TrendingSection {
    /// Backend selector.
    #[serde(default)]
    pub backend: Option<TrendingBackendKind>,
    /// Number of records shown.
    #[serde(default)]
    pub limit: Option<usize>,
    /// Database file for the local backend.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// API root for the appwrite backend.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Project id for the appwrite backend.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Database id for the appwrite backend.
    #[serde(default)]
    pub database_id: Option<String>,
    /// Collection id for the appwrite backend.
    #[serde(default)]
    pub collection_id: Option<String>,
    /// Server API key for the appwrite backend.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Trending settings after merging; see [`TrendingSettings::backend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingSettings {
    /// Selected backend.
    pub kind: TrendingBackendKind,
    /// Number of records shown.
    pub limit: usize,
    /// Local database file.
    pub path: PathBuf,
    /// Appwrite API root.
    pub endpoint: Option<String>,
    /// Appwrite project id.
    pub project_id: Option<String>,
    /// Appwrite database id.
    pub database_id: Option<String>,
    /// Appwrite collection id.
    pub collection_id: Option<String>,
    /// Appwrite server key.
    pub api_key: Option<Secret>,
}

/// A fully specified trending backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrendingBackend {
    /// Hosted document database.
    Appwrite(AppwriteConfig),
    /// Embedded database file.
    Local {
        /// Database file path.
        path: PathBuf,
    },
    /// Trending turned off.
    Disabled,
}

impl TrendingSettings {
    /// Validate the settings for the selected backend.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when the appwrite backend lacks
    /// an endpoint, project, database or collection id.
    pub fn backend(&self, image_base_url: &str) -> Result<TrendingBackend, ConfigError> {
        fn required(value: &Option<String>, field: &'static str) -> Result<String, ConfigError> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(ConfigError::MissingField {
                    section: "trending",
                    field,
                })
        }

        match self.kind {
            TrendingBackendKind::Disabled => Ok(TrendingBackend::Disabled),
            TrendingBackendKind::Local => Ok(TrendingBackend::Local {
                path: self.path.clone(),
            }),
            TrendingBackendKind::Appwrite => Ok(TrendingBackend::Appwrite(AppwriteConfig {
                endpoint: required(&self.endpoint, "endpoint")?,
                project_id: required(&self.project_id, "project_id")?,
                database_id: required(&self.database_id, "database_id")?,
                collection_id: required(&self.collection_id, "collection_id")?,
                api_key: self.api_key.clone(),
                image_base_url: image_base_url.to_string(),
            })),
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Catalog connection.
    pub catalog: CatalogConfig,
    /// Poster image root URL.
    pub image_base_url: String,
    /// Debounce quiet period.
    pub debounce: Duration,
    /// Query shown (and searched) at startup.
    pub initial_query: String,
    /// Trending storage.
    pub trending: TrendingSettings,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            initial_query: String::new(),
            trending: TrendingSettings {
                kind: TrendingBackendKind::Local,
                limit: DEFAULT_TRENDING_LIMIT,
                path: default_trending_path(),
                endpoint: None,
                project_id: None,
                database_id: None,
                collection_id: None,
                api_key: None,
            },
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/reelseek/reelseek.log` on Linux, falling back to
/// the current directory when no state directory exists for the platform.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("reelseek").join("reelseek.log"),
        None => PathBuf::from("reelseek.log"),
    }
}

/// Resolve default local trending database path.
///
/// Returns `~/.local/share/reelseek/trending.redb` on Linux.
pub fn default_trending_path() -> PathBuf {
    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("reelseek").join("trending.redb"),
        None => PathBuf::from("trending.redb"),
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/reelseek/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("reelseek").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `REELSEEK_CONFIG` environment variable
/// 3. Default path `~/.config/reelseek/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("REELSEEK_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let catalog = config.catalog.unwrap_or_default();
    let search = config.search.unwrap_or_default();
    let trending = config.trending.unwrap_or_default();

    ResolvedConfig {
        catalog: CatalogConfig {
            base_url: catalog.base_url.unwrap_or(defaults.catalog.base_url),
            api_token: catalog.api_token.and_then(Secret::non_empty),
            language: catalog.language.unwrap_or(defaults.catalog.language),
            timeout: catalog.request_timeout_secs.map(Duration::from_secs),
        },
        image_base_url: catalog.image_base_url.unwrap_or(defaults.image_base_url),
        debounce: search
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce),
        initial_query: search.initial_query.unwrap_or(defaults.initial_query),
        trending: TrendingSettings {
            kind: trending.backend.unwrap_or(defaults.trending.kind),
            limit: trending.limit.unwrap_or(defaults.trending.limit),
            path: trending.path.unwrap_or(defaults.trending.path),
            endpoint: trending.endpoint,
            project_id: trending.project_id,
            database_id: trending.database_id,
            collection_id: trending.collection_id,
            api_key: trending.api_key.and_then(Secret::non_empty),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TMDB_API_TOKEN`: catalog bearer token
/// - `APPWRITE_API_KEY`: trending server key
/// - `REELSEEK_TRENDING_BACKEND`: `appwrite`, `local` or `disabled`
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for an unknown backend name.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Some(token) = std::env::var("TMDB_API_TOKEN").ok().and_then(Secret::non_empty) {
        config.catalog.api_token = Some(token);
    }

    if let Some(key) = std::env::var("APPWRITE_API_KEY").ok().and_then(Secret::non_empty) {
        config.trending.api_key = Some(key);
    }

    if let Ok(backend) = std::env::var("REELSEEK_TRENDING_BACKEND") {
        config.trending.kind = backend.parse().map_err(|_| ConfigError::InvalidValue {
            field: "REELSEEK_TRENDING_BACKEND".to_string(),
            reason: format!("unknown backend {backend:?}"),
        })?;
    }

    Ok(config)
}

/// Overrides collected from command-line flags.
///
/// `None`/`false` means "flag not given, keep the lower-precedence value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--search`
    pub initial_query: Option<String>,
    /// `--debounce-ms`
    pub debounce_ms: Option<u64>,
    /// `--language`
    pub language: Option<String>,
    /// `--no-trending`
    pub disable_trending: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(query) = overrides.initial_query {
        config.initial_query = query;
    }

    if let Some(ms) = overrides.debounce_ms {
        config.debounce = Duration::from_millis(ms);
    }

    if let Some(language) = overrides.language {
        config.catalog.language = language;
    }

    if overrides.disable_trending {
        config.trending.kind = TrendingBackendKind::Disabled;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
