//! Essays CLI - terminal client for the essay review service

mod commands;
mod config;
mod logging;
mod shell;
mod views;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use commands::{App, Command};
use config::ClientConfig;
use essays_core::{FileStore, Session};
use essays_http::EssayClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, error, info};

#[derive(Parser)]
#[command(name = "essays")]
#[command(about = "Read, write and review essays")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Config file (defaults to the platform config dir)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long, global = true)]
    timeout: Option<u64>,

    /// Directory holding the stored username and log file
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log to <data-dir>/essays.log instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Option<TopLevel>,
}

#[derive(Subcommand)]
enum TopLevel {
    #[command(flatten)]
    Action(Command),

    /// Interactive shell keeping one session across commands (the default)
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }
    config.validate()?;

    let data_dir = config.data_dir();
    logging::init_logging(cli.log_level.into(), &data_dir, cli.log_file)?;

    info!(base_url = %config.base_url, data_dir = %data_dir.display(), "Starting essays client");

    let session = Arc::new(Session::new(Arc::new(FileStore::in_dir(&data_dir))));
    let client = EssayClient::builder()
        .base_url(config.base_url.clone())
        .session(session)
        .timeout(config.timeout())
        .build()?;
    let app = App::new(client);

    match cli.command {
        Some(TopLevel::Action(command)) => match app.execute(command).await {
            Ok(view) => println!("{view}"),
            Err(e) => {
                error!("Command failed: {e}");
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Some(TopLevel::Shell) | None => shell::run(&app).await?,
    }

    Ok(())
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
