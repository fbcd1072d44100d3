//! TUI mode
//!
//! This module contains the TUI mode startup logic.
//! It delegates to the actual TUI implementation.

use tracing::info;

use crate::config::StaticConfig;
use crate::errors::Result;
use crate::system::{RunMode, init_logging, install_panic_hook};

/// Run TUI mode
///
/// This function:
/// 1. Installs the terminal-restoring panic hook
/// 2. Loads configuration and initializes logging (file or discarded)
/// 3. Delegates to the actual TUI implementation
pub async fn run_tui(config_path: Option<&str>) -> Result<()> {
    install_panic_hook(RunMode::Tui);

    let config = StaticConfig::load(config_path)?;
    let _guard = init_logging(&config.logging, RunMode::Tui)?;
    info!("Using geolocation endpoint: {}", config.geo.endpoint);

    crate::interfaces::tui::run_tui(&config).await
}
