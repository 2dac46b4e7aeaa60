//! attendance-core - command line access to the time-format helpers

mod cli;

use anyhow::{Context, Result};
use attendance_core::config::Config;
use attendance_core::defaults::LOG_FILE_NAME;
use attendance_core::time_format::{NoTrace, TimeTrace, TracingTrace};
use clap::Parser;
use tracing::debug;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // File appender for persistent logs (daily rotation)
    let file_appender = open_log_file(&config.logs_dir)?;
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // stdout carries command output, so console logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    debug!(?config, "Configuration loaded");

    let trace: &dyn TimeTrace = if config.trace_time_inputs {
        &TracingTrace
    } else {
        &NoTrace
    };

    let stdout = std::io::stdout();
    cli::run(cli.command, trace, &mut stdout.lock())
}

fn open_log_file(logs_dir: &str) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs dir '{logs_dir}'"))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_NAME)
        .build(logs_dir)
        .with_context(|| format!("Failed to open log file in '{logs_dir}'"))
}
