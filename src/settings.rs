//! Runtime settings
//!
//! Loaded from a JSON file on native builds; every field is optional and
//! falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::tuning::{Tuning, TuningError};

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "LEDGE_RUNNER_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(#[from] TuningError),
}

/// Viewport, tuning, and headless demo options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === View ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Gameplay ===
    pub tuning: Tuning,

    // === Demo run ===
    /// Seed for the demo pilot's input stream
    pub demo_seed: u64,
    /// Frames to simulate before giving up
    pub demo_ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            tuning: Tuning::default(),
            demo_seed: 12345,
            demo_ticks: 60 * 60,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise from `LEDGE_RUNNER_SETTINGS`,
    /// otherwise defaults. A bad file is logged and ignored.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let env_path = std::env::var_os(SETTINGS_ENV);
        let Some(path) = path.or(env_path.as_deref().map(Path::new)) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_nested_tuning_override() {
        let json = r#"{ "viewport_width": 1024, "tuning": { "jump_power": -14 } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.viewport_width, 1024.0);
        assert_eq!(settings.tuning.jump_power, -14.0);
        assert_eq!(settings.tuning.gravity, crate::consts::GRAVITY);
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_negative_tuning_rejected() {
        let err = Settings::from_json(r#"{ "tuning": { "enemy_speed": -2 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(TuningError::Negative {
                field: "enemy_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/ledge-runner/settings.json");
        assert!(matches!(Settings::load_from(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }
}
