//! Optional TOML configuration.
//!
//! Looked up at `<config dir>/dog-training-assistant/config.toml` unless a path is given.
//! No file at the default location means defaults. A path given with `--config` must exist,
//! and a malformed file is an error either way.
//!
//! ```toml
//! [search]
//! delay_ms = 1500
//!
//! [directory]
//! default_sort = "rating"
//!
//! [training]
//! sample_entries = true
//!
//! [logging]
//! level = "debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::SortKey;

pub const APP_DIR_NAME: &str = "dog-training-assistant";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub directory: DirectoryConfig,
    pub training: TrainingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Simulated latency before an answer is shown
    pub delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

impl SearchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub default_sort: SortKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Start the log with the two example sessions
    pub sample_entries: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { sample_entries: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when the env var is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
}

impl AppConfig {
    /// Parse a config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Load from an explicit path, which must exist, or from the default location when a
    /// file is there
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.search.delay(), Duration::from_millis(1500));
        assert_eq!(config.directory.default_sort, SortKey::Distance);
        assert!(config.training.sample_entries);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("[directory]\ndefault_sort = \"rating\"\n").unwrap();
        assert_eq!(config.directory.default_sort, SortKey::Rating);
        assert_eq!(config.search.delay_ms, 1500);
    }

    #[test]
    fn test_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_explicit_missing_path_is_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("conifg.toml");

        let err = AppConfig::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Read { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_invalid_sort_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[directory]\ndefault_sort = \"price\"\n");
        assert!(result.is_err());
    }
}
