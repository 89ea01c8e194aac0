//! # Glide Engine
//!
//! Headless host for the Glide movement controller.
//!
//! Stands in for the pieces a game engine would provide:
//! - Physics body that integrates position
//! - Scripted keyboard input
//! - Camera viewport that bounds the play area
//! - Fixed timestep loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod config;
mod script;
mod timing;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{EngineConfig, CONFIG_FILE};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("glide=info".parse()?))
        .init();

    info!("Glide starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // `glide --init [path]` writes the default config and exits
    let mut args = std::env::args().skip(1).peekable();
    let init = args.next_if(|arg| arg == "--init").is_some();
    let config_path = args
        .next()
        .map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from);

    if init {
        EngineConfig::default()
            .save_to(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        return Ok(());
    }

    let config = EngineConfig::load_from(&config_path);

    app::run(config)?;

    info!("Glide shutdown complete");
    Ok(())
}
