//! Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::theme::Theme;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default)]
    pub version: String,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
    /// Trainer settings
    #[serde(default)]
    pub trainer: TrainerSettings,
}

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Theme preference; absent means follow the system theme
    pub theme: Option<Theme>,
    /// Font scale multiplier
    pub font_scale: f32,
    /// Show the macro split chart on the dashboard
    pub show_macro_chart: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: None,
            font_scale: 1.0,
            show_macro_chart: true,
        }
    }
}

/// Trainer simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerSettings {
    /// Seconds between simulated reps
    pub rep_interval_secs: u64,
    /// Seconds between coaching messages
    pub feedback_interval_secs: u64,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            rep_interval_secs: 3,
            feedback_interval_secs: 4,
        }
    }
}

impl TrainerSettings {
    /// Rep cadence as a duration.
    pub fn rep_interval(&self) -> Duration {
        Duration::from_secs(self.rep_interval_secs)
    }

    /// Feedback cadence as a duration.
    pub fn feedback_interval(&self) -> Duration {
        Duration::from_secs(self.feedback_interval_secs)
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fitform", "FitForm")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
///
/// A missing file is not an error; defaults are returned.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig {
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to an explicit path.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
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
