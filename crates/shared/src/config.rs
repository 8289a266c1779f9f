//! Configuration management for the add-on.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with sensible defaults for all settings. The listening port can also be
//! provided through the `PORT` environment variable, which takes precedence
//! over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the listening port
pub const PORT_ENV: &str = "PORT";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log directory path
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            default_level: "info".to_string(),
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(mut self) -> Result<Self> {
        let port = std::env::var(PORT_ENV).ok();
        self.apply_port(port.as_deref())?;
        Ok(self)
    }

    /// Override the listening port from a raw string value
    ///
    /// `None` and blank values leave the configured port untouched.
    pub fn apply_port(&mut self, raw: Option<&str>) -> Result<()> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(());
        };

        self.server.port = raw
            .parse()
            .with_context(|| format!("Invalid {} value: {:?}", PORT_ENV, raw))?;

        Ok(())
    }

    /// Address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
