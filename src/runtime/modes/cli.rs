//! CLI mode
//!
//! Loads configuration, sets up logging on stderr and runs one command.

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::system::{RunMode, init_logging, install_panic_hook};

/// Run CLI mode
///
/// `config generate` 不读取配置文件，生成的正是配置文件本身
pub async fn run_cli(command: Commands, config_path: Option<&str>) -> Result<(), CliError> {
    install_panic_hook(RunMode::Cli);

    let config = match &command {
        Commands::Config { .. } => StaticConfig::default(),
        _ => StaticConfig::load(config_path)?,
    };
    let _guard = init_logging(&config.logging, RunMode::Cli)?;

    run_cli_command(command, &config).await
}
