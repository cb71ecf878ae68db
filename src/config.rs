//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Officer;

/// Config file name, both in the platform config dir and in dev mode.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Identity shown in the header.
    #[serde(default)]
    pub officer: Officer,
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    /// How long a toast stays on screen, in seconds.
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: f32,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_dark_mode() -> bool {
    true
}

fn default_toast_seconds() -> f32 {
    4.0
}

fn default_window_width() -> f32 {
    1440.0
}

fn default_window_height() -> f32 {
    900.0
}

/// Smallest window the four-column home view fits in.
pub const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

impl AppConfig {
    /// Get config file path in the platform config directory.
    ///
    /// Falls back to the current directory when no home directory is known.
    pub fn default_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.officer.badge_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "Badge number must contain only digits".to_string(),
            ));
        }
        if self.officer.rank.trim().is_empty() {
            return Err(ConfigError::Validation("Officer rank cannot be empty".to_string()));
        }
        if !(1.0..=30.0).contains(&self.ui.toast_seconds) {
            return Err(ConfigError::Validation(
                "Toast duration must be between 1 and 30 seconds".to_string(),
            ));
        }
        if !self.ui.window_width.is_finite() || !self.ui.window_height.is_finite() {
            return Err(ConfigError::Validation("Window size must be a finite number".to_string()));
        }
        if self.ui.window_width < MIN_WINDOW_SIZE[0] || self.ui.window_height < MIN_WINDOW_SIZE[1] {
            return Err(ConfigError::Validation(format!(
                "Window size must be at least {}x{}",
                MIN_WINDOW_SIZE[0], MIN_WINDOW_SIZE[1]
            )));
        }
        Ok(())
    }

    /// Save configuration to file, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            toast_seconds: default_toast_seconds(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

/// Platform directories for config and log files.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("gov", "LSPD", "Mobile Data Terminal")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("lspd-mdt-test-{}-{}", name, std::process::id()))
            .join(CONFIG_FILE_NAME)
    }

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_officer() {
        let config = AppConfig::default();
        assert_eq!(config.officer.name, "Officer Michael Scott");
        assert_eq!(config.officer.rank, "Sergeant");
        assert_eq!(config.officer.badge_number, "4521");
    }

    #[test]
    fn test_validation_badge_number_digits() {
        let mut config = AppConfig::default();
        config.officer.badge_number = "45A1".to_string();
        assert!(config.validate().is_err());

        config.officer.badge_number = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_name_allowed() {
        let mut config = AppConfig::default();
        config.officer.name = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_rank() {
        let mut config = AppConfig::default();
        config.officer.rank = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_toast_seconds_bounds() {
        let mut config = AppConfig::default();

        config.ui.toast_seconds = 0.5;
        assert!(config.validate().is_err());

        config.ui.toast_seconds = 31.0;
        assert!(config.validate().is_err());

        config.ui.toast_seconds = 10.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_window_size() {
        let mut config = AppConfig::default();
        config.ui.window_width = 640.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_window_size_not_finite() {
        let config: AppConfig = toml::from_str("[ui]\nwindow_width = nan\n").expect("nan is valid toml");
        assert!(config.validate().is_err());

        let config: AppConfig = toml::from_str("[ui]\nwindow_height = inf\n").expect("inf is valid toml");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("[officer]\nname = \"Officer Lee\"\nrank = \"Officer\"\nbadge_number = \"1\"\n")
            .expect("partial config should parse");
        assert_eq!(config.officer.name, "Officer Lee");
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_try_load_missing() {
        let path = temp_config_path("missing");
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let mut config = AppConfig::default();
        config.officer.name = "Officer Jane Park".to_string();
        config.save(&path).expect("save should succeed");

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded, config),
            other => panic!("expected Loaded, got {:?}", other),
        }

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_try_load_invalid() {
        let path = temp_config_path("invalid");
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).expect("create temp dir");
        }
        std::fs::write(&path, "[ui]\ntoast_seconds = 120.0\n").expect("write temp config");

        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Validation(_))
        ));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
