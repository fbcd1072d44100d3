//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for iptracker using clap's derive macros.

use clap::{Parser, Subcommand};

/// iptracker - IP address and domain geolocation lookup
#[derive(Parser)]
#[command(name = "iptracker")]
#[command(version)]
#[command(about = "Look up where an IP address or domain lives", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start TUI mode (default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// Look up a single IP address or domain and print the result
    ///
    /// Usage: lookup [QUERY]
    /// - Without QUERY, looks up the caller's own public IP
    Lookup {
        /// IPv4 address, IPv6 address or domain name
        query: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup_with_json() {
        let cli = Cli::try_parse_from(["iptracker", "lookup", "8.8.8.8", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Lookup { query, json }) => {
                assert_eq!(query.as_deref(), Some("8.8.8.8"));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_lookup_without_query() {
        let cli = Cli::try_parse_from(["iptracker", "lookup"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Lookup { query: None, json: false })
        ));
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["iptracker", "config", "generate", "-c", "my.toml", "--force"])
                .unwrap();
        assert_eq!(cli.config.as_deref(), Some("my.toml"));
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigCommands::Generate { force: true, .. }
            })
        ));
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::try_parse_from(["iptracker"]).unwrap();
        assert!(cli.command.is_none());
    }
}
