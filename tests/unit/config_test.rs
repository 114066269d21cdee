//! Unit tests for application configuration loading.

use roadpilot_settings::config::{load_config_from, save_config_to, AppConfig};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let config = load_config_from(&path).expect("load defaults");
    assert_eq!(config.ui.font_scale, 1.0);
    assert_eq!(config.params_dir, AppConfig::default().params_dir);
}

#[test]
fn test_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.params_dir = dir.path().join("params");
    config.ui.font_scale = 1.5;

    save_config_to(&config, &path).expect("save");
    let loaded = load_config_from(&path).expect("load");

    assert_eq!(loaded.params_dir, config.params_dir);
    assert_eq!(loaded.ui.font_scale, 1.5);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\nfont_scale = 2.0\n").expect("write");

    let config = load_config_from(&path).expect("load");
    assert_eq!(config.ui.font_scale, 2.0);
    assert_eq!(config.ui.window_width, 1280.0);
    assert_eq!(config.params_dir, AppConfig::default().params_dir);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not toml {{{").expect("write");

    assert!(load_config_from(&path).is_err());
}
