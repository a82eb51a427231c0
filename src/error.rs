//! Domain error types.
//!
//! Library operations return these typed errors; the CLI and TUI boundaries wrap them in
//! `anyhow` with context before showing them to the user.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected training entry submission. The store is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("dog name is required")]
    MissingDogName,
    #[error("activity is required")]
    MissingActivity,
}

/// Failure to hand a contact target to the dialer, mail client or browser
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{provider} has no {channel} contact")]
    NoTarget { provider: String, channel: &'static str },
    #[error("failed to open {target}: {source}")]
    Spawn {
        target: String,
        #[source]
        source: std::io::Error,
    },
    #[error("system opener rejected {target} (exit status {status})")]
    Rejected { target: String, status: i32 },
    #[error("no system opener available on this platform")]
    Unsupported,
}

/// Failure to attach photos from the local media library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("photo not found: {0}")]
    NotFound(PathBuf),
    #[error("not an image file: {0}")]
    UnsupportedType(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
