/// Configuration file loading
mod common;

use std::time::Duration;

use common::ConfigFile;
use dog_training_assistant::config::AppConfig;
use dog_training_assistant::error::ConfigError;
use dog_training_assistant::models::SortKey;

#[test]
fn test_empty_file_uses_defaults() {
    let config_file = ConfigFile::new();
    let config = AppConfig::load(Some(config_file.path())).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_explicit_missing_file_is_read_error() {
    let config_file = ConfigFile::missing();
    let err = AppConfig::load(Some(config_file.path())).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_full_config() {
    let config_file = ConfigFile::new().with_contents(
        r#"
[search]
delay_ms = 250

[directory]
default_sort = "rating"

[training]
sample_entries = false

[logging]
level = "debug"
"#,
    );
    let config = AppConfig::load(Some(config_file.path())).unwrap();

    assert_eq!(config.search.delay(), Duration::from_millis(250));
    assert_eq!(config.directory.default_sort, SortKey::Rating);
    assert!(!config.training.sample_entries);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_malformed_file_is_parse_error() {
    let config_file = ConfigFile::new().with_contents("[search\ndelay_ms = ");
    let err = AppConfig::load(Some(config_file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let config_file = ConfigFile::new().with_contents("[search]\ndelay_ms = \"soon\"\n");
    assert!(matches!(
        AppConfig::load(Some(config_file.path())),
        Err(ConfigError::Parse { .. })
    ));
}
