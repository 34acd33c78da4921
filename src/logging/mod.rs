//! Diagnostic logging to disk.
//!
//! The terminal is in raw mode while the UI runs, so `tracing` output goes to
//! a daily file `holidays-tui_<date>.log` in the configured log directory
//! (default: `~/.local/share/holidays-tui/logs/`). Nothing is installed when
//! logging is disabled, which makes every `tracing` macro a no-op.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Install the file subscriber. Returns the log file path when enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level: Level = config
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let log_dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}

/// Expand a leading `~` to the home directory.
fn expand_log_dir(log_dir: &str) -> PathBuf {
    let rest = if log_dir == "~" {
        Some("")
    } else {
        log_dir.strip_prefix("~/")
    };
    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => Path::new(log_dir).to_path_buf(),
    }
}

fn log_file_name(date: NaiveDate) -> String {
    format!("holidays-tui_{}.log", date.format("%Y-%m-%d"))
}
