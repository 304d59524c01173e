// SPDX-License-Identifier: MPL-2.0
//! This module handles the portal's configuration, including loading and saving
//! preferences to a `settings.toml` file and resolving the unlock PIN.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[content]` - Content and photo directories
//! - `[gallery]` - Photo wall size
//! - `[portal]` - Recipient and sender names
//!
//! The unlock PIN never lives in `settings.toml`; see [`secrets`].
//!
//! # Examples
//!
//! ```no_run
//! use valentine_portal::app::config;
//!
//! let config = config::load();
//! println!("photos come from {}", config.content.photos_dir().display());
//! ```

pub mod defaults;
pub mod secrets;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Where content files and photos are read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Directory holding the JSON content files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Directory scanned for the photo wall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos_dir: Option<PathBuf>,
}

impl ContentConfig {
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    #[must_use]
    pub fn photos_dir(&self) -> PathBuf {
        self.photos_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PHOTOS_DIR))
    }
}

/// Photo wall settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// How many photos the wall shows, clamped to a sane range on read.
    #[serde(default = "default_max_photos", skip_serializing_if = "Option::is_none")]
    pub max_photos: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            max_photos: default_max_photos(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn max_photos(&self) -> usize {
        self.max_photos
            .unwrap_or(DEFAULT_MAX_PHOTOS)
            .clamp(MIN_MAX_PHOTOS, MAX_MAX_PHOTOS)
    }
}

/// Names printed on the pages and on the certificate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

impl PortalConfig {
    #[must_use]
    pub fn recipient(&self) -> &str {
        self.recipient.as_deref().unwrap_or(DEFAULT_RECIPIENT)
    }

    #[must_use]
    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or(DEFAULT_SENDER)
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
    pub content: ContentConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub portal: PortalConfig,
}

fn default_max_photos() -> Option<usize> {
    Some(DEFAULT_MAX_PHOTOS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
pub fn load() -> Config {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// A missing file yields the defaults silently. A file that cannot be read or
/// parsed yields the defaults too, with a warning in the log.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Config {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return config,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings unreadable, using defaults");
                }
            }
        }
    }
    Config::default()
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory, returning the written path.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no config directory available".into()))?;
    save_to_path(config, &path)?;
    Ok(path)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            content: ContentConfig {
                data_dir: Some(PathBuf::from("/srv/portal/data")),
                photos_dir: Some(PathBuf::from("/srv/portal/photos")),
            },
            gallery: GalleryConfig {
                max_photos: Some(12),
            },
            portal: PortalConfig {
                recipient: Some("Sam".into()),
                sender: Some("Alex".into()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general\ntheme_mode = ").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.content.data_dir(), PathBuf::from("data"));
        assert_eq!(config.content.photos_dir(), PathBuf::from("assets/photos"));
        assert_eq!(config.gallery.max_photos(), 10);
        assert_eq!(config.portal.recipient(), "Ren");
        assert_eq!(config.portal.sender(), "Aanya");
    }

    #[test]
    fn max_photos_is_clamped() {
        let none = GalleryConfig {
            max_photos: Some(0),
        };
        let huge = GalleryConfig {
            max_photos: Some(10_000),
        };
        assert_eq!(none.max_photos(), MIN_MAX_PHOTOS);
        assert_eq!(huge.max_photos(), MAX_MAX_PHOTOS);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[portal]\nrecipient = \"Jo\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load partial config");
        assert_eq!(loaded.portal.recipient(), "Jo");
        assert_eq!(loaded.portal.sender(), DEFAULT_SENDER);
        assert_eq!(loaded.gallery.max_photos(), DEFAULT_MAX_PHOTOS);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        let written = save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert_eq!(written, base_dir.join("settings.toml"));

        let loaded = load_with_override(Some(base_dir));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let config = load_with_override(Some(base_dir));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("a").join("b").join("settings.toml");

        save_to_path(&Config::default(), &nested).expect("save nested config");
        assert!(nested.exists());
    }
}
