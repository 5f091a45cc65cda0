use newscheck::config::{Config, ConfigError, ConfigStore};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.analysis.latency_ms, 2000);
    assert_eq!(config.analysis.latency(), Duration::from_secs(2));
    assert!(config.analysis.seed.is_none());
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.toast_duration_ms, 4000);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("newscheck/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[analysis]
seed = 42

[logging]
enabled = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.analysis.seed, Some(42));
    assert_eq!(config.analysis.latency_ms, 2000);
    assert!(!config.logging.enabled);
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn test_parse_error_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[analysis\nlatency_ms = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_validation_rejects_zero_toast_duration() {
    let mut config = Config::default();
    config.ui.toast_duration_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_store_exposes_config_and_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[analysis]\nlatency_ms = 10\n").unwrap();

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    let shared = store.clone();
    assert_eq!(store.get().analysis.latency_ms, 10);
    assert_eq!(shared.get(), store.get());
    assert_eq!(store.path(), path.as_path());
}
