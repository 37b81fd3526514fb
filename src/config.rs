//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! default values, response headers, logging and paths. `AppConfig` is the root
//! configuration struct containing all settings.
//!
//! The listening port is written into the file at deployment time (the shipped
//! template carries a `{{port}}` placeholder), so it is never read from the
//! environment or the command line.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// HTTP Defaults
// =============================================================================

/// Default bind address (all interfaces, as a container entry point needs)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port, matching the deployment tool's default
pub const DEFAULT_HTTP_PORT: u16 = 8080;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Greeting and health responses describe the live process, so upstream caches
// must never store them.

pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Application Defaults
// =============================================================================

/// Version string reported in the greeting when none is configured
pub const DEFAULT_APP_VERSION: &str = "0.0.13";

/// Body returned by the liveness probe
pub const HEALTH_BODY: &str = "ok";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Log target for this crate (crate name with underscores)
pub const LOG_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", LOG_TARGET);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Greeting settings
    #[serde(default)]
    pub app: GreetingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Settings that feed the greeting body
#[derive(Debug, Clone, Deserialize)]
pub struct GreetingConfig {
    /// Version reported after the container id
    #[serde(default = "GreetingConfig::default_version")]
    pub version: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
        }
    }
}

impl GreetingConfig {
    fn default_version() -> String {
        DEFAULT_APP_VERSION.to_string()
    }
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Parsed log format.
    pub fn log_format(&self) -> Result<LogFormat, ConfigError> {
        match self.format.as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got {:?}",
                other
            ))),
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;

        config.logging.log_format()?;
        config.socket_addr()?;

        Ok(config)
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.host, self.http.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!("Invalid http.host or http.port: {}", e))
            })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            app: GreetingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
