//! Game settings and preferences
//!
//! Stored as JSON. Every field is optional in the file; missing fields fall
//! back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "APPLE_CATCHER_SETTINGS";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Simulation ===
    /// Fixed RNG seed; a fresh seed per launch when absent
    pub seed: Option<u64>,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            show_fps: false,

            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: origin.to_string(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Settings file '{}' not found, using defaults", display);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: display,
                    source,
                });
            }
        };

        let settings = Self::from_json(&json, &display)?;
        log::info!("Loaded settings from '{}'", display);
        Ok(settings)
    }

    /// Load from `path`, else from [`SETTINGS_ENV`], else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let display = path.display().to_string();
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: display.clone(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| ConfigError::Write {
            path: display.clone(),
            source,
        })?;
        log::info!("Settings saved to '{}'", display);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Volume { name, value });
            }
        }
        self.tuning.validate()
    }
}
