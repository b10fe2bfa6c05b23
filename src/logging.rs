//! Tracing setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a daily-rolling
//! file in the data directory. One-shot CLI commands log to stderr.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "whatshallimake.log";

/// `RUST_LOG` wins, then the configured level, then `fallback`.
fn filter_directive(env: Option<String>, configured: Option<&str>, fallback: &str) -> String {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}

fn build_filter(configured: Option<&str>, fallback: &str) -> EnvFilter {
    let directive = filter_directive(std::env::var("RUST_LOG").ok(), configured, fallback);
    EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{directive}': {e}, using '{fallback}'");
        EnvFilter::new(fallback)
    })
}

/// Keep the returned guard alive for the whole session or buffered lines are lost.
pub fn init_file_logging(dir: &Path, configured: Option<&str>) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(build_filter(configured, "info"))
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(false))
        .try_init()?;

    Ok(guard)
}

pub fn init_stderr_logging(configured: Option<&str>) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(configured, "warn"))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_then_config_then_fallback() {
        assert_eq!(filter_directive(Some("trace".into()), Some("debug"), "info"), "trace");
        assert_eq!(filter_directive(Some("  ".into()), Some("debug"), "info"), "debug");
        assert_eq!(filter_directive(None, None, "warn"), "warn");
    }
}
