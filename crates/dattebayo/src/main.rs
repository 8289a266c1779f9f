//! Dattebayo add-on server.

use anyhow::{Context, Result};
use clap::Parser;
use dattebayo::{AniListClient, AppState, ResponseCache};
use shared::{Config, LogConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Port to listen on (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?
        .with_env_overrides()?;

    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Initialize logging
    let mut log_config = LogConfig::from_settings("dattebayo", &config.logging);
    if args.verbose {
        log_config.default_level = tracing::Level::DEBUG;
    }
    shared::logging::init(log_config)?;

    info!(config_file = %args.config.display(), "Dattebayo starting");

    // The cache lives for the whole process and is dropped on shutdown
    let cache = Arc::new(ResponseCache::new());
    let client = AniListClient::new().context("Failed to create AniList client")?;
    info!(endpoint = client.endpoint(), "AniList client ready");

    let state = AppState::new(Arc::new(client), cache);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    dattebayo::run_server(listener, state)
        .await
        .context("Server failed")?;

    info!("Dattebayo stopped");

    Ok(())
}
