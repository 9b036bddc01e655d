// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use docdesk::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.notifications.default_duration_ms = 5000;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.notifications.default_duration_ms, 5000);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::ui::{AutoDismiss, TransitionDelay};
use crate::error::Result;
use crate::ui::notifications::Anchor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DocDesk";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notifications: NotificationConfig,
    pub upload: UploadConfig,
    pub counter: CounterConfig,
}

/// `[notifications]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Lifetime of a toast; zero or negative keeps it until dismissed.
    pub default_duration_ms: i64,
    pub enter_delay_ms: u64,
    pub exit_delay_ms: u64,
    pub anchor: Anchor,
    /// Number of lifecycle events kept for export.
    pub history_capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_TOAST_DURATION_MS,
            enter_delay_ms: DEFAULT_ENTER_DELAY_MS,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
            anchor: Anchor::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn default_lifetime(&self) -> AutoDismiss {
        AutoDismiss::from_millis(self.default_duration_ms)
    }

    #[must_use]
    pub fn enter_delay(&self) -> TransitionDelay {
        TransitionDelay::from_millis(self.enter_delay_ms)
    }

    #[must_use]
    pub fn exit_delay(&self) -> TransitionDelay {
        TransitionDelay::from_millis(self.exit_delay_ms)
    }
}

/// `[upload]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_size_bytes: u64,
    /// Dot-prefixed, lower-case extensions.
    pub allowed_extensions: Vec<String>,
    pub progress_interval_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            progress_interval_ms: DEFAULT_PROGRESS_INTERVAL_MS,
        }
    }
}

impl UploadConfig {
    #[must_use]
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms.max(1))
    }
}

/// `[counter]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub target: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    pub show_percentage: bool,
    pub show_progress: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_COUNTER_TARGET,
            max: None,
            show_percentage: true,
            show_progress: true,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory, or the
/// defaults if no file exists yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from `path`. Unparsable content falls back to
/// the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.notifications.default_duration_ms = 5000;
        config.notifications.anchor = Anchor::BottomLeft;
        config.counter.max = Some(800);
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[notifications]\ndefault_duration_ms = 0\nanchor = \"top-left\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.notifications.anchor, Anchor::TopLeft);
        assert!(loaded.notifications.default_lifetime().is_sticky());
        assert_eq!(loaded.notifications.exit_delay_ms, DEFAULT_EXIT_DELAY_MS);
        assert_eq!(loaded.upload, UploadConfig::default());
        assert_eq!(loaded.counter.target, DEFAULT_COUNTER_TARGET);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn transition_delays_are_clamped() {
        let config = NotificationConfig {
            exit_delay_ms: 60_000,
            ..NotificationConfig::default()
        };
        assert_eq!(
            config.exit_delay().as_duration(),
            Duration::from_millis(crate::domain::ui::newtypes::toast_bounds::MAX_TRANSITION_MS)
        );
    }

    #[test]
    fn default_upload_extensions() {
        let upload = UploadConfig::default();
        assert_eq!(upload.allowed_extensions, vec![".pdf", ".doc", ".docx", ".txt"]);
        assert_eq!(upload.progress_interval(), Duration::from_millis(200));
    }
}
