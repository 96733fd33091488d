//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Arena size, seeding and demo options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,
    /// Fixed RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,

    // === Headless demo ===
    /// Let the autopilot steer the player
    pub autopilot: bool,
    /// Rounds to play before exiting
    pub rounds: u32,
    /// Frame cap per round
    pub max_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // 1280x880 window less the 200px margin
            arena_width: 1080.0,
            arena_height: 680.0,
            seed: None,

            autopilot: true,
            rounds: 1,
            // Two minutes at 120 Hz
            max_frames: 2 * 60 * 120,
        }
    }
}

impl Settings {
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let dimensions = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if self.rounds == 0 {
            return Err(SettingsError::Invalid("rounds must be at least 1".into()));
        }
        if self.max_frames == 0 {
            return Err(SettingsError::Invalid("max_frames must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.arena_size(), Vec2::new(1080.0, 680.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "arena_width": 640, "seed": 7 }"#).unwrap();
        assert_eq!(settings.arena_width, 640.0);
        assert_eq!(settings.arena_height, 680.0);
        assert_eq!(settings.seed, Some(7));
        assert!(settings.autopilot);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            seed: Some(42),
            rounds: 3,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "arena_height": -5 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "rounds": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "max_frames": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Some(Path::new("/nonexistent/coin-rush.json"))).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }
}
