use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use newsstand::{
    cli::{self, Cli},
    config::Settings,
    logging::{init_logging, LoggingHandle},
};
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (settings, handle) = match setup(&cli) {
        Ok(ready) => ready,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let code = match cli::run(&cli, &settings) {
        Ok(()) => {
            info!("newsstand finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("newsstand failed: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    };
    handle.shutdown();
    code
}

/// Загружает настройки и поднимает логирование.
fn setup(cli: &Cli) -> Result<(Settings, LoggingHandle)> {
    let mut settings =
        Settings::load_from(cli.config.as_deref()).context("Failed to load settings")?;
    cli.apply_verbosity(&mut settings.logging);

    let handle = init_logging(&settings.logging).context("Failed to initialize logging")?;
    cli::install_panic_hook();
    info!(
        magazines = settings.magazines.len(),
        subscribers = settings.subscribers.len(),
        config = ?cli.config,
        "Settings loaded"
    );
    Ok((settings, handle))
}
