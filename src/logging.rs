//! Logging setup using the tracing ecosystem.
//!
//! The interactive remote owns the terminal, so it logs to a file; one-shot
//! commands log to stderr.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "CMOTE_LOG";

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE: &str = "cmote.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    File,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub output: LogOutput,
    /// Filter directive, e.g. "info" or "cmote=debug"
    pub filter: String,
}

impl LogConfig {
    /// File logging for the terminal UI
    pub fn tui(configured: Option<&str>) -> Self {
        Self {
            output: LogOutput::File,
            filter: resolve_filter(std::env::var(LOG_ENV).ok(), configured),
        }
    }

    /// stderr logging for one-shot commands
    pub fn cli(configured: Option<&str>) -> Self {
        Self {
            output: LogOutput::Stderr,
            filter: resolve_filter(std::env::var(LOG_ENV).ok(), configured),
        }
    }
}

/// Environment wins over the config file, which wins over the default
pub fn resolve_filter(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|s| !s.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// `$XDG_STATE_HOME/cmote`, falling back to the cache dir, then the temp dir
pub fn log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("cmote")
}

pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("Invalid log filter: {}", config.filter))?;

    let fmt_layer = fmt::layer().with_target(true);

    match config.output {
        LogOutput::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.with_writer(std::io::stderr))
                .try_init()
                .context("Failed to init logging")?;
        }
        LogOutput::File => {
            let dir = log_dir();
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {:?}", dir))?;

            let path = dir.join(LOG_FILE);
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.with_writer(file).with_ansi(false))
                .try_init()
                .context("Failed to init logging")?;
        }
    }

    Ok(())
}
