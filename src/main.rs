use anyhow::Context;
use clap::Parser;

use dnis::cli::Cli;
use dnis::config::{DiagnosticsConfig, set_config};
use dnis::interfaces::cli::run_cli_command;
use dnis::system::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => DiagnosticsConfig::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        None => DiagnosticsConfig::load(),
    };
    set_config(config.clone());

    init_logging(&config.logging)?;

    run_cli_command(cli.command, &config)?;
    Ok(())
}
