//! Setup for the checker diagnostics.
//!
//! Diagnostics are written to the standard error so the standard output keeps
//! the single status line the monitoring system parses. The level is taken
//! from the `--log-level` option:
//!
//! - `Off` (default, nothing is installed)
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
use std::sync::Once;

use clap::ValueEnum;
use tracing::debug;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// It redirects the tracing output to the standard error with the given level.
pub fn setup(log_level: LogLevel) {
    let tracing_level = map_to_tracing_level_filter(log_level);

    if tracing_level == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_stderr_init(tracing_level);
    });
}

fn map_to_tracing_level_filter(log_level: LogLevel) -> LevelFilter {
    match log_level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

fn tracing_stderr_init(filter: LevelFilter) {
    let () = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!("Logging initialized");
}
