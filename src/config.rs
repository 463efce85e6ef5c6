//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::model::UserId;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub web: WebConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where the settings came from, reported once logging is up
    #[serde(skip)]
    pub origin: ConfigOrigin,
}

/// Provenance of a loaded [`Config`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOrigin {
    /// File the settings were read from; `None` for built-in defaults
    pub path: Option<PathBuf>,
    /// Candidate files that exist but could not be used
    pub rejected: Vec<ConfigError>,
}

/// FreshTrack API connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fixed user every request is made for
    #[serde(default = "default_user_id")]
    pub user_id: UserId,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_user_id() -> UserId {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: default_user_id(),
        }
    }
}

/// Page behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Window for the urgent-items panel
    #[serde(default = "default_expiring_days")]
    pub expiring_days: u32,

    #[serde(default = "default_recipe_limit")]
    pub recipe_limit: u32,

    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

fn default_expiring_days() -> u32 {
    3
}

fn default_recipe_limit() -> u32 {
    10
}

fn default_toast_ms() -> u64 {
    crate::notify::DEFAULT_TOAST_MS
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            expiring_days: default_expiring_days(),
            recipe_limit: default_recipe_limit(),
            toast_ms: default_toast_ms(),
        }
    }
}

impl DashboardConfig {
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

/// Browser dashboard server
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl WebConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

impl LoggingConfig {
    /// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
    /// Output goes to stderr so rendered pages on stdout stay clean.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("freshtrack={},tower_http={}", self.level, self.level))
        });

        let registry = tracing_subscriber::registry().with(filter);
        let result = if self.format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
        } else {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
        };

        if let Err(e) = result {
            eprintln!("Logging already initialized: {}", e);
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

        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        config.normalize();
        config.origin.path = Some(path.to_path_buf());

        Ok(config)
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

    /// Load from an explicit path, else default locations, else environment
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("freshtrack").join("config.toml")),
            Some(PathBuf::from("./freshtrack.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// First candidate that exists and parses, else environment only.
    /// Nothing is logged here since the subscriber is built from the result;
    /// call [`Config::log_origin`] after [`LoggingConfig::init`].
    fn load_first(paths: &[PathBuf]) -> Self {
        let mut rejected = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(mut config) => {
                    config.origin.rejected = rejected;
                    return config;
                }
                Err(e) => rejected.push(e),
            }
        }

        let mut config = Self::from_env();
        config.origin.rejected = rejected;
        config
    }

    /// Report where the settings came from
    pub fn log_origin(&self) {
        for error in &self.origin.rejected {
            tracing::warn!("Skipped config file: {}", error);
        }
        match &self.origin.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("FRESHTRACK_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(user) = std::env::var("FRESHTRACK_USER_ID") {
            if let Ok(id) = user.parse() {
                self.api.user_id = id;
            }
        }

        if let Ok(host) = std::env::var("FRESHTRACK_WEB_HOST") {
            self.web.host = host;
        }
        if let Ok(port) = std::env::var("FRESHTRACK_WEB_PORT") {
            if let Ok(p) = port.parse() {
                self.web.port = p;
            }
        }

        if let Ok(level) = std::env::var("FRESHTRACK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FRESHTRACK_LOG_FORMAT") {
            self.logging.format = format;
        }

        self.normalize();
    }

    fn normalize(&mut self) {
        let trimmed = self.api.base_url.trim_end_matches('/').len();
        self.api.base_url.truncate(trimmed);
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# FreshTrack Dashboard Configuration
#
# Environment variables override these settings:
# - FRESHTRACK_API_URL
# - FRESHTRACK_USER_ID
# - FRESHTRACK_WEB_HOST
# - FRESHTRACK_WEB_PORT
# - FRESHTRACK_LOG_LEVEL
# - FRESHTRACK_LOG_FORMAT

[api]
# FreshTrack API base URL
base_url = "http://localhost:8000"

# User all requests are made for
user_id = 1

[dashboard]
# Items expiring within this many days show in the urgent panel
expiring_days = 3

# Number of recipe recommendations to request
recipe_limit = 10

# How long a notification stays visible (ms)
toast_ms = 3000

[web]
# Browser dashboard host
host = "127.0.0.1"

# Browser dashboard port
port = 8084

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
