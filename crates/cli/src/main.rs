//! Tela CLI - interactive screen tracking for a silk-screen printing shop

mod config;
mod forms;
mod render;
mod shell;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tela_core::domain::Settings;
use tela_core::port::{SystemClock, UuidProvider};
use tela_core::TrackerService;

#[derive(Parser)]
#[command(name = "tela")]
#[command(about = "Screen tracking for the print shop", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, env = "TELA_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the session log file (defaults to the platform data
    /// directory)
    #[arg(long, env = "TELA_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    plain: bool,
}

/// Filter from TELA_LOG, then RUST_LOG, then the built-in default.
fn log_filter() -> Result<EnvFilter> {
    EnvFilter::try_from_env("TELA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("tela=info,tela_core=info"))
        .context("Failed to create env filter")
}

/// Initialize logging into a file so the interactive shell keeps stdout
/// to itself. The returned guard must stay alive for the whole session.
fn init_logging(dir: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file = tracing_appender::rolling::never(dir, "tela.log");
    let (writer, guard) = tracing_appender::non_blocking(file);

    let log_format = std::env::var("TELA_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = log_filter()?;

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(writer))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
        }
    }

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.plain {
        colored::control::set_override(false);
    }

    let log_dir = match cli.log_dir {
        Some(ref dir) => dir.clone(),
        None => config::default_log_dir()?,
    };
    let _guard = init_logging(&log_dir)?;

    info!("Tela v{} starting", tela_core::VERSION);

    let settings: Settings = config::load_settings(cli.config.as_deref())?;
    info!(
        art_finishers = settings.art_finishers.len(),
        delivery_people = settings.delivery_people.len(),
        "Settings loaded"
    );

    let mut service = TrackerService::new(settings, Arc::new(UuidProvider), Arc::new(SystemClock));

    shell::run(&mut service)?;

    info!("Session closed");
    Ok(())
}
