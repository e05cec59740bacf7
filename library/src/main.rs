//! RomM catalog browser
//!
//! Usage: `romm [CONFIG_FILE]`
//!
//! Without an argument the configuration is read from the platform config
//! directory, falling back to defaults.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use romm_core::config;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match env::args_os().nth(1) {
        Some(arg) => {
            let path = PathBuf::from(arg);
            tracing::info!("Using configuration {}", path.display());
            config::load_from(&path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => config::load(),
    };

    if config.server.url.is_empty() {
        tracing::warn!("No server URL configured");
    }

    romm_library::app::run(config)?;
    Ok(())
}
