//! Configuration management for Recipe Hunter.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! Secrets are not part of `Config`; see [`crate::core::credentials`].

use crate::core::error::{Result, RecipeError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub options: OptionsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,
}

/// Upstream recipe API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout_sec: u64,

    /// Results requested per search
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// `key=value` file holding API_KEY and SESSION_SECRET
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// JSON file holding all saved searches
    #[serde(default = "default_saved_searches_file")]
    pub saved_searches_file: PathBuf,
}

/// Display configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Maximum characters of a result summary on the search page
    #[serde(default = "default_summary_chars")]
    pub summary_chars: usize,
}

/// Option lists offered on the search form
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionsConfig {
    #[serde(default = "default_diets")]
    pub diets: Vec<String>,

    #[serde(default = "default_intolerances")]
    pub intolerances: Vec<String>,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_upstream_timeout() -> u64 {
    10
}

fn default_page_size() -> usize {
    10
}

fn default_credentials_file() -> PathBuf {
    PathBuf::from("recipehunter.env")
}

fn default_saved_searches_file() -> PathBuf {
    PathBuf::from("./saved_searches.json")
}

fn default_summary_chars() -> usize {
    200
}

fn default_diets() -> Vec<String> {
    [
        "gluten free",
        "ketogenic",
        "vegetarian",
        "lacto-vegetarian",
        "ovo-vegetarian",
        "vegan",
        "pescetarian",
        "paleo",
        "primal",
        "low fodmap",
        "whole30",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_intolerances() -> Vec<String> {
    [
        "dairy",
        "egg",
        "gluten",
        "grain",
        "peanut",
        "seafood",
        "sesame",
        "shellfish",
        "soy",
        "sulfite",
        "tree nut",
        "wheat",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_sec: default_request_timeout(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_sec: default_upstream_timeout(),
            page_size: default_page_size(),
            credentials_file: default_credentials_file(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            saved_searches_file: default_saved_searches_file(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            summary_chars: default_summary_chars(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            diets: default_diets(),
            intolerances: default_intolerances(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RecipeError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. RECIPE_HUNTER_CONFIG env var
    /// 2. XDG config file (~/.config/recipe-hunter/config.toml)
    /// 3. ./recipe-hunter.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("RECIPE_HUNTER_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("recipe-hunter.toml").exists() {
                Self::from_file("recipe-hunter.toml")?
            } else {
                Self::default()
            }
        };

        // Keep the store under the XDG data directory unless placed explicitly
        if config.storage.saved_searches_file == default_saved_searches_file() {
            config.storage.saved_searches_file = xdg.saved_searches_file();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("RECIPE_HUNTER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("RECIPE_HUNTER_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Upstream configuration
        if let Ok(base_url) = env::var("RECIPE_HUNTER_BASE_URL") {
            self.upstream.base_url = base_url;
        }
        if let Ok(page_size) = env::var("RECIPE_HUNTER_PAGE_SIZE") {
            if let Ok(size) = page_size.parse() {
                self.upstream.page_size = size;
            }
        }
        if let Ok(timeout) = env::var("RECIPE_HUNTER_UPSTREAM_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.upstream.timeout_sec = t;
            }
        }
        if let Ok(file) = env::var("RECIPE_HUNTER_CREDENTIALS_FILE") {
            self.upstream.credentials_file = PathBuf::from(file);
        }

        // Storage configuration
        if let Ok(file) = env::var("RECIPE_HUNTER_DATA_FILE") {
            self.storage.saved_searches_file = PathBuf::from(file);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(RecipeError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.server.request_timeout_sec == 0 {
            return Err(RecipeError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if self.upstream.base_url.trim().is_empty() {
            return Err(RecipeError::ConfigError(
                "Upstream base URL cannot be empty".to_string(),
            ));
        }

        if self.upstream.timeout_sec == 0 {
            return Err(RecipeError::ConfigError(
                "Upstream timeout must be non-zero".to_string(),
            ));
        }

        if self.upstream.page_size == 0 {
            return Err(RecipeError::ConfigError(
                "Page size must be non-zero".to_string(),
            ));
        }

        if self.display.summary_chars == 0 {
            return Err(RecipeError::ConfigError(
                "Summary length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (secrets live elsewhere and are never logged)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Request timeout: {}s", self.server.request_timeout_sec);
        tracing::info!("  Upstream: {}", self.upstream.base_url);
        tracing::info!("  Upstream timeout: {}s", self.upstream.timeout_sec);
        tracing::info!("  Page size: {}", self.upstream.page_size);
        tracing::info!("  Credentials file: {:?}", self.upstream.credentials_file);
        tracing::info!("  Saved searches: {:?}", self.storage.saved_searches_file);
        tracing::info!(
            "  Options: {} diets, {} intolerances",
            self.options.diets.len(),
            self.options.intolerances.len()
        );
    }
}
