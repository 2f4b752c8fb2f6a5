// SPDX-License-Identifier: MPL-2.0
//! This module handles the extractor configuration, including loading and
//! saving it to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use capture_meta::config;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep capture times as written by the camera
//! config.apply_time_offset = false;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "CaptureMeta";

/// Fallback values for a camera that omits lens details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraProfile {
    pub make: String,
    pub model: String,
    /// Lens model used when the file carries none.
    pub lens: String,
    /// Focal length text used when the file carries none, or only
    /// `native_focal_length`.
    pub focal_length: String,
    #[serde(default)]
    pub native_focal_length: String,
}

impl CameraProfile {
    /// Returns `true` if this profile applies to `make`/`model`.
    #[must_use]
    pub fn matches(&self, make: &str, model: &str) -> bool {
        self.make == make && self.model == model
    }

    /// Built-in profile for the FUJIFILM X100F fixed-lens camera.
    #[must_use]
    pub fn fujifilm_x100f() -> Self {
        Self {
            make: defaults::FIXED_LENS_MAKE.to_string(),
            model: defaults::FIXED_LENS_MODEL.to_string(),
            lens: defaults::FIXED_LENS_MODEL_NAME.to_string(),
            focal_length: defaults::FIXED_LENS_FOCAL_LENGTH.to_string(),
            native_focal_length: defaults::FIXED_LENS_NATIVE_FOCAL_LENGTH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Shift capture times by `OffsetTimeOriginal` so they are stored in UTC.
    pub apply_time_offset: bool,
    pub camera_profiles: Vec<CameraProfile>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            apply_time_offset: defaults::DEFAULT_APPLY_TIME_OFFSET,
            camera_profiles: vec![CameraProfile::fujifilm_x100f()],
        }
    }
}

impl ExtractorConfig {
    /// First profile matching `make`/`model`.
    #[must_use]
    pub fn profile_for(&self, make: &str, model: &str) -> Option<&CameraProfile> {
        self.camera_profiles
            .iter()
            .find(|profile| profile.matches(make, model))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Returns the defaults when no settings file exists.
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be read.
pub fn load() -> Result<ExtractorConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ExtractorConfig::default())
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &ExtractorConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from `path`.
///
/// Invalid TOML falls back to the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<ExtractorConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), "invalid settings, using defaults: {err}");
            Ok(ExtractorConfig::default())
        }
    }
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_to_path(config: &ExtractorConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
