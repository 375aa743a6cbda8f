// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[gallery]` - CDN account, interaction and view mode, share link base
//! - `[loupe]` - Magnifier diameter and magnification
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `ICED_LIGHTBOX_CONFIG_DIR` (see [`paths`])
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::newtypes::{LoupeSize, LoupeZoomLevel};
use crate::error::{Error, Result};
use crate::media::cdn::CdnConfig;
use crate::ui::gallery::{GalleryConfig, InteractionMode, ViewMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Photo source and modal behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GallerySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdn_host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<InteractionMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<ViewMode>,

    /// Public site used in share links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_base_url: Option<String>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            cdn_host: Some(DEFAULT_CDN_HOST.to_string()),
            cloud_name: Some(DEFAULT_CLOUD_NAME.to_string()),
            interaction: Some(InteractionMode::default()),
            view_mode: Some(ViewMode::default()),
            share_base_url: Some(DEFAULT_SHARE_BASE_URL.to_string()),
        }
    }
}

/// Magnifier loupe settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoupeConfig {
    /// Diameter in logical pixels (clamped to 60–400).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,

    /// Magnification (clamped to 1.5–4).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_level: Option<f32>,
}

impl Default for LoupeConfig {
    fn default() -> Self {
        Self {
            size: Some(DEFAULT_LOUPE_SIZE),
            zoom_level: Some(DEFAULT_LOUPE_ZOOM),
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
    pub gallery: GallerySettings,

    #[serde(default)]
    pub loupe: LoupeConfig,
}

impl Config {
    /// Builds the gallery options, clamping out-of-range loupe values.
    #[must_use]
    pub fn gallery_config(&self) -> GalleryConfig {
        let gallery = &self.gallery;
        GalleryConfig {
            cdn: CdnConfig::new(
                gallery.cdn_host.as_deref().unwrap_or(DEFAULT_CDN_HOST),
                gallery.cloud_name.as_deref().unwrap_or(DEFAULT_CLOUD_NAME),
            ),
            interaction: gallery.interaction.unwrap_or_default(),
            view_mode: gallery.view_mode.unwrap_or_default(),
            loupe_size: LoupeSize::new(self.loupe.size.unwrap_or(DEFAULT_LOUPE_SIZE)),
            loupe_zoom: LoupeZoomLevel::new(self.loupe.zoom_level.unwrap_or(DEFAULT_LOUPE_ZOOM)),
            initial_index: 0,
            share_base_url: gallery
                .share_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_SHARE_BASE_URL.to_string()),
        }
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning i18n key). A missing file
/// yields defaults without a warning; a malformed file yields defaults with
/// [`CONFIG_LOAD_WARNING_KEY`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Same as [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        tracing::debug!("no config directory available, using defaults");
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded settings");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings, using defaults");
            (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()))
        }
    }
}

/// Parses the settings file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Same as [`save`], writing below `base_dir` when given.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Writes `config` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
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
            },
            gallery: GallerySettings {
                cloud_name: Some("conf-pics".to_string()),
                interaction: Some(InteractionMode::PinchZoom),
                view_mode: Some(ViewMode::Full),
                ..GallerySettings::default()
            },
            loupe: LoupeConfig {
                size: Some(220.0),
                zoom_level: Some(3.0),
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

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_malformed_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[loupe]\nsize = \"big\"")
            .expect("failed to write settings");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.loupe, LoupeConfig::default());
    }

    #[test]
    fn gallery_config_clamps_loupe_values() {
        let config = Config {
            loupe: LoupeConfig {
                size: Some(10_000.0),
                zoom_level: Some(0.5),
            },
            ..Config::default()
        };
        let gallery = config.gallery_config();
        assert_eq!(gallery.loupe_size.value(), MAX_LOUPE_SIZE);
        assert_eq!(gallery.loupe_zoom.value(), MIN_LOUPE_ZOOM);
        assert_eq!(gallery.cdn.host(), DEFAULT_CDN_HOST);
    }
}
