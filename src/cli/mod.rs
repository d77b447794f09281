//! Командная строка `newsstand`: разбор аргументов, меню и демо.

pub mod demo;
pub mod menu;
mod render;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error};

pub use menu::Menu;

use crate::{catalog::Catalog, config::Settings, logging::LoggingConfig};

/// Аргументы командной строки.
#[derive(Parser, Debug)]
#[command(name = "newsstand")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Magazine subscriptions: publish issues, notify readers and libraries", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Путь к TOML-файлу настроек
    #[arg(
        short,
        long,
        env = "NEWSSTAND_CONFIG",
        help = "TOML-файл с каталогом и настройками логирования"
    )]
    pub config: Option<PathBuf>,
    /// Подробный вывод (debug)
    #[arg(short, long, conflicts_with = "quiet", help = "Включить подробный вывод для отладки")]
    pub verbose: bool,
    /// Только предупреждения и ошибки
    #[arg(short, long, help = "Подавить логирование (только warn/error)")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Подкоманды CLI
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Интерактивное меню (по умолчанию)
    #[command(alias = "m")]
    Menu,
    /// Неинтерактивная демонстрация
    Demo,
}

impl Cli {
    /// Подкоманда с учётом значения по умолчанию.
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Menu)
    }

    /// Переопределяет уровень логов флагами `-v`/`-q`.
    pub fn apply_verbosity(
        &self,
        logging: &mut LoggingConfig,
    ) {
        if self.verbose {
            logging.level = "debug".to_string();
        } else if self.quiet {
            logging.level = "warn".to_string();
        }
    }
}

/// Выполняет выбранную подкоманду на stdin/stdout.
pub fn run(
    cli: &Cli,
    settings: &Settings,
) -> Result<()> {
    debug!(command = ?cli.command(), "Running command");
    let stdout = io::stdout();
    match cli.command() {
        Commands::Menu => {
            let catalog =
                Catalog::from_settings(settings).context("Failed to build the catalog")?;
            let stdin = io::stdin();
            Menu::new(&catalog, stdin.lock(), stdout.lock())
                .run()
                .context("Menu I/O failed")?;
        }
        Commands::Demo => {
            let mut out = stdout.lock();
            demo::run(&mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Паника логируется через `tracing` до стандартного обработчика.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(location = location.as_str(), "Panic: {info}");
        default_hook(info);
    }));
}
