//! CLI interface module
//!
//! This module provides one-shot command-line functionality for iptracker.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::{LookupError, TrackerError};
use crate::services::create_provider;
use commands::{config_generate, run_lookup};

#[derive(Debug)]
pub enum CliError {
    ConfigError(String),
    Lookup(LookupError),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::Lookup(e) => format!("Lookup error [{}]: {}", e.code(), e.message()),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::Lookup(e) => format!(
                "{} {} {}",
                "Lookup error".red().bold(),
                format!("[{}]:", e.code()).yellow(),
                e.message().white()
            ),
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LookupError> for CliError {
    fn from(err: LookupError) -> Self {
        CliError::Lookup(err)
    }
}

impl From<TrackerError> for CliError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::CommandError(other.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Lookup { query, json } => {
            let provider = create_provider(&config.geo);
            run_lookup(provider.as_ref(), query, json).await
        }
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
        },
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is not a one-shot command".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_error_conversion() {
        let err: CliError = TrackerError::config("bad").into();
        assert!(matches!(err, CliError::ConfigError(ref m) if m == "bad"));

        let err: CliError = TrackerError::file_operation("denied").into();
        assert!(matches!(err, CliError::CommandError(_)));
    }

    #[test]
    fn test_format_simple_includes_code() {
        let err = CliError::Lookup(LookupError::NetworkFailure);
        assert_eq!(
            err.format_simple(),
            "Lookup error [L004]: Network error. Please try again."
        );
    }
}
