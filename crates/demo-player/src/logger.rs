use anyhow::{anyhow, Context, Result};
use chrono::Local;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::constants::defaults;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaults::LOG_FILTER))
}

/// Logs to a timestamped file under `log_dir`. Used while the TUI owns the
/// terminal; anything on stderr would corrupt the screen.
pub fn init_file_logging(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_file = log_dir.join(format!("rpc_demo_{timestamp}.log"));
    let file = File::create(&log_file)
        .with_context(|| format!("creating log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;

    tracing::info!(file = %log_file.display(), "=== rpc-demo log started at {} ===", Local::now());
    Ok(log_file)
}

/// Logs to stderr for the headless commands.
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}
