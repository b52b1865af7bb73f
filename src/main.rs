//! funapp binary entrypoint kept minimal. The screen runtime lives in `funapp::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use funapp::settings::paths;
use funapp::{app, args};

struct FunappTimer;

impl tracing_subscriber::fmt::time::FormatTime for FunappTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS"
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the env filter, preferring `RUST_LOG` over the command-line level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing into `<config>/logs/funapp.log`.
///
/// Inputs:
/// - `args`: Parsed arguments (config directory override and log level)
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(args: &args::Args) {
    let level = args::determine_log_level(args);
    let config_dir = paths::config_dir(args.config_dir.as_deref());
    let log_path = paths::logs_dir(&config_dir).join("funapp.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(FunappTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(FunappTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args);

    tracing::info!("funapp starting");
    if let Err(err) = app::run(&args).await {
        tracing::error!(error = %err, "Application error");
        eprintln!("funapp: {err}");
        std::process::exit(1);
    }
    tracing::info!("funapp exited");
}
