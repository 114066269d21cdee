//! Application configuration.
//!
//! A small TOML file controls where the parameter store lives and how the
//! console is drawn. Settings themselves live in the parameter store, not
//! here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root directory of the persistent parameter store.
    pub params_dir: PathBuf,
    /// Root directory of the volatile session store. Lives under the system
    /// temp dir so its contents do not survive a reboot.
    pub session_dir: PathBuf,
    /// UI settings
    pub ui: UiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            params_dir: default_params_dir(),
            session_dir: default_session_dir(),
            ui: UiSettings::default(),
        }
    }
}

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font scale multiplier
    pub font_scale: f32,
    /// Window width in logical pixels
    pub window_width: f32,
    /// Window height in logical pixels
    pub window_height: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_scale: 1.0,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "roadpilot", "RoadPilot")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default parameter store root.
pub fn default_params_dir() -> PathBuf {
    get_data_dir().join("params")
}

/// Default session store root.
pub fn default_session_dir() -> PathBuf {
    std::env::temp_dir().join("roadpilot-session")
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`. A missing file yields the
/// defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
