//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::{POPULATION_INDICATOR, POPULATION_YEAR};
use crate::series::DEFAULT_TOP_N;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub indicator: IndicatorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the version prefix, e.g. `http://localhost:8080/api/v1`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Which indicator series the chart shows
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default = "default_indicator_code")]
    pub code: String,

    #[serde(default = "default_indicator_year")]
    pub year: i32,

    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_indicator_code() -> String {
    POPULATION_INDICATOR.to_string()
}

fn default_indicator_year() -> i32 {
    POPULATION_YEAR
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            code: default_indicator_code(),
            year: default_indicator_year(),
            top_n: default_top_n(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// A file that exists but cannot be read or parsed is an error rather
    /// than a silent fall back to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file among `paths`, or the environment alone
    pub fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::debug!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::debug!("Using default config with environment overrides");
                Ok(Self::from_env())
            }
        }
    }

    /// Candidate config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("county-atlas").join("config.toml")),
            Some(PathBuf::from("./county-atlas.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = var("COUNTY_ATLAS_API_URL") {
            self.api.base_url = url;
        }

        // Indicator overrides
        if let Some(code) = var("COUNTY_ATLAS_INDICATOR") {
            self.indicator.code = code;
        }
        if let Some(year) = var("COUNTY_ATLAS_YEAR").and_then(|y| y.parse().ok()) {
            self.indicator.year = year;
        }
        if let Some(top_n) = var("COUNTY_ATLAS_TOP_N").and_then(|n| n.parse().ok()) {
            self.indicator.top_n = top_n;
        }

        // Logging overrides
        if let Some(level) = var("COUNTY_ATLAS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("COUNTY_ATLAS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# County Atlas Configuration
#
# Environment variables override these settings:
# - COUNTY_ATLAS_API_URL
# - COUNTY_ATLAS_INDICATOR
# - COUNTY_ATLAS_YEAR
# - COUNTY_ATLAS_TOP_N
# - COUNTY_ATLAS_LOG_LEVEL
# - COUNTY_ATLAS_LOG_FORMAT

[api]
# Base URL of the county API, including the version prefix
base_url = "http://localhost:8080/api/v1"

# Request timeout in seconds
request_timeout_secs = 30

[indicator]
# Indicator code shown in the ranked chart
code = "POP_TOTAL"

# Census year
year = 2019

# Number of bars in the chart
top_n = 10

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
