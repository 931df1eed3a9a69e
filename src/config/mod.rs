// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, stored as a
//! `settings.toml` file in the config directory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[upload]` - Endpoint, multipart field name and request timeout
//! - `[notifications]` - Corner and margin of the toast stack
//!
//! # Examples
//!
//! ```no_run
//! use accident_uploader::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! println!("uploading to {}", config.upload.endpoint());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::Anchor;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key pushed as a notification when the config file is unreadable.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Where and how images are uploaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Absolute URL the multipart form is posted to.
    #[serde(default = "default_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Multipart field name the server reads the image from.
    #[serde(default = "default_field_name", skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    /// Request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u32>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            field_name: default_field_name(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl UploadConfig {
    /// Returns the configured endpoint, or the default one.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .unwrap_or(DEFAULT_UPLOAD_ENDPOINT)
    }

    /// Returns the configured multipart field name, or the default one.
    #[must_use]
    pub fn field_name(&self) -> &str {
        self.field_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_UPLOAD_FIELD)
    }

    /// Returns the request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(u64::from(secs))
    }
}

/// Toast stack placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Window corner the toast stack is anchored to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,

    /// Distance from the anchored corner in pixels.
    #[serde(default = "default_toast_margin", skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            anchor: Some(Anchor::default()),
            margin: default_toast_margin(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_UPLOAD_ENDPOINT.to_string())
}

fn default_field_name() -> Option<String> {
    Some(DEFAULT_UPLOAD_FIELD.to_string())
}

fn default_request_timeout_secs() -> Option<u32> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_toast_margin() -> Option<f32> {
    Some(DEFAULT_TOAST_MARGIN)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            upload: UploadConfig {
                endpoint: Some("http://detector.local:8080/upload".to_string()),
                field_name: Some("photo".to_string()),
                request_timeout_secs: Some(15),
            },
            notifications: NotificationsConfig {
                anchor: Some(Anchor::BottomLeft),
                margin: Some(8.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[upload]\nendpoint = 42\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.upload.endpoint(), DEFAULT_UPLOAD_ENDPOINT);
        assert_eq!(loaded.upload.field_name(), DEFAULT_UPLOAD_FIELD);
        assert_eq!(loaded.notifications.margin, Some(DEFAULT_TOAST_MARGIN));
    }

    #[test]
    fn blank_upload_values_resolve_to_defaults() {
        let upload = UploadConfig {
            endpoint: Some("  ".to_string()),
            field_name: None,
            request_timeout_secs: Some(0),
        };

        assert_eq!(upload.endpoint(), DEFAULT_UPLOAD_ENDPOINT);
        assert_eq!(upload.field_name(), DEFAULT_UPLOAD_FIELD);
        assert_eq!(
            upload.request_timeout(),
            Duration::from_secs(u64::from(MIN_REQUEST_TIMEOUT_SECS))
        );
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn file_written_in_config_dir_is_loaded_from_that_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.upload.endpoint = Some("http://detector.local:5000/".to_string());

        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.upload.endpoint(), "http://detector.local:5000/");
    }
}
