//! Evidence Anchor CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use evidence_anchor::cli::{commands, handle_error, Cli, Commands};
use evidence_anchor::LoggerImpl;

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli) {
        handle_error(err, json_mode);
    }
}

fn run(cli: Cli) -> Result<()> {
    let _logger = LoggerImpl::init(&cli.log_config()).context("Failed to initialize logging")?;

    let settings = Arc::new(cli.loader().resolve().context("Failed to load settings")?);

    match cli.command {
        Commands::Settings { command } => {
            commands::settings::execute(command, &settings, cli.json)
        }
    }
}
