//! Logging infrastructure for the add-on.
//!
//! This module provides structured logging to the console with an optional
//! daily-rotated log file, contextual fields, and module-specific log levels.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log directory path
    pub log_dir: String,
    /// Component name (used for log file naming)
    pub component: String,
    /// Default log level
    pub default_level: Level,
    /// Enable console output
    pub console: bool,
    /// Enable file output
    pub file: bool,
    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            component: "dattebayo".to_string(),
            default_level: Level::INFO,
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl LogConfig {
    /// Build a logging configuration from the loaded config file settings
    ///
    /// Unknown level names fall back to INFO.
    pub fn from_settings(component: &str, settings: &crate::config::LoggingConfig) -> Self {
        Self {
            log_dir: settings.log_dir.clone(),
            component: component.to_string(),
            default_level: settings.default_level.parse().unwrap_or(Level::INFO),
            console: settings.console,
            file: settings.file,
            json_format: settings.json_format,
        }
    }

    /// Default filter directives used when `RUST_LOG` is unset
    pub fn filter_directives(&self) -> String {
        format!(
            "{}={},shared={},tower_http={},hyper=warn,reqwest=warn,h2=warn",
            self.component.replace('-', "_"),
            self.default_level,
            self.default_level,
            self.default_level
        )
    }
}

/// Initialize logging with the given configuration
///
/// Sets up tracing with:
/// - Console output (human-readable)
/// - Optional file output with daily rotation
/// - Module-specific log levels, overridable via `RUST_LOG`
/// - Optional JSON formatting for the file
pub fn init(config: LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directives()));

    let mut layers = Vec::new();

    if config.console {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stdout)
            .boxed();
        layers.push(console_layer);
    }

    if config.file {
        let log_dir = Path::new(&config.log_dir);
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", config.log_dir))?;

        let file_appender = tracing_appender::rolling::daily(log_dir, &config.component);

        let file_layer = if config.json_format {
            fmt::layer()
                .json()
                .with_target(true)
                .with_level(true)
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(file_appender)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(file_appender)
                .boxed()
        };

        layers.push(file_layer);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!(
        component = %config.component,
        file = config.file,
        log_dir = %config.log_dir,
        "Logging initialized"
    );

    Ok(())
}
