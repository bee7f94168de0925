//! Rota CLI - sign in to the portal from a terminal

mod commands;
mod config;
mod logging;
mod storage;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, debug, error};

#[derive(Parser)]
#[command(name = "rota")]
#[command(about = "Sign in to the Rota portal and check page access")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Configuration file (TOML)
    #[arg(short = 'c', long, global = true, env = "ROTA_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the stored session
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Request timeout in seconds (0 = no timeout)
    #[arg(short = 't', long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.into())?;

    let portal = config::load_config(cli.config.as_deref(), cli.timeout)?;
    debug!(?portal, "Loaded configuration");

    match cli.command.execute(portal, cli.data_dir).await {
        Ok(code) => Ok(code),
        Err(e) => {
            error!("Command failed: {e:#}");
            eprintln!("error: {e:#}");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
