//! Shared library for the Dattebayo add-on.
//!
//! This crate provides common functionality used by the add-on crates:
//! - Configuration management
//! - Logging infrastructure
//! - Add-on response models

pub mod config;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use logging::LogConfig;
pub use models::*;

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
