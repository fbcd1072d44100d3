use clap::Parser;

use iptracker::cli::Cli;
use iptracker::runtime::modes::{self, Mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match modes::detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = modes::run_tui(config_path).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                anyhow::bail!("No command given");
            };
            if let Err(e) = modes::run_cli(command, config_path).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            anyhow::bail!("No execution mode available: build with the `cli` or `tui` feature");
        }
    }

    Ok(())
}
