//! Tracing subscriber setup.
//!
//! The CLI logs to stderr. The TUI owns the terminal, so it logs to a file in the cache dir.
//! `DOG_TRAINING_ASSISTANT_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::APP_DIR_NAME;

pub const LOG_ENV_VAR: &str = "DOG_TRAINING_ASSISTANT_LOG";
const TUI_LOG_FILENAME: &str = "tui.log";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr
pub fn init_stderr(default_level: &str) {
    // A subscriber may already be installed (tests); keep the first one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Path of the TUI log file
pub fn tui_log_path() -> Result<PathBuf> {
    let cache = dirs::cache_dir().context("Failed to get platform cache directory")?;
    Ok(cache.join(APP_DIR_NAME).join(TUI_LOG_FILENAME))
}

/// Log to a file so output does not draw over the alternate screen
pub fn init_file(default_level: &str) -> Result<PathBuf> {
    let path = tui_log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create log directory")?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(path)
}
