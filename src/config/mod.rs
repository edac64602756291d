// SPDX-License-Identifier: MPL-2.0
//! This module handles the cropper's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use lens_crop::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Use bigger touch targets
//! config.finger_size = Some(44.0);
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
//! assert_eq!(loaded_config.finger_size, Some(44.0));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{DEFAULT_FINGER_SIZE, DEFAULT_MAX_ZOOM_SCALE, DEFAULT_MIN_CROP_SIZE};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LensCrop";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub finger_size: Option<f32>,
    #[serde(default)]
    pub min_crop_width: Option<f32>,
    #[serde(default)]
    pub min_crop_height: Option<f32>,
    #[serde(default)]
    pub max_zoom_scale: Option<f32>,
    #[serde(default)]
    pub show_overlay_on_load: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            finger_size: Some(DEFAULT_FINGER_SIZE),
            min_crop_width: Some(DEFAULT_MIN_CROP_SIZE),
            min_crop_height: Some(DEFAULT_MIN_CROP_SIZE),
            max_zoom_scale: Some(DEFAULT_MAX_ZOOM_SCALE),
            show_overlay_on_load: Some(false),
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

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file; using defaults");
            Ok(Config::default())
        }
    }
}

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
    fn save_and_load_round_trip_preserves_touch_settings() {
        let config = Config {
            finger_size: Some(44.0),
            min_crop_width: Some(60.0),
            min_crop_height: Some(40.0),
            max_zoom_scale: Some(3.0),
            show_overlay_on_load: Some(true),
        };
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
    fn missing_fields_deserialize_as_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "finger_size = 20.0\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.finger_size, Some(20.0));
        assert!(loaded.min_crop_width.is_none());
        assert!(loaded.max_zoom_scale.is_none());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_config_uses_default_constants() {
        let config = Config::default();
        assert_eq!(config.finger_size, Some(DEFAULT_FINGER_SIZE));
        assert_eq!(config.min_crop_width, Some(DEFAULT_MIN_CROP_SIZE));
        assert_eq!(config.max_zoom_scale, Some(DEFAULT_MAX_ZOOM_SCALE));
    }
}
