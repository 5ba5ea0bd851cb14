//! Session settings
//!
//! Read-only configuration; the game never writes it back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{COMBAT_INTERVAL_MS, MAX_SUBSTEPS, MUSIC_VOLUME};
use crate::error::GameError;

/// Retry bounds for the level generator's rejection sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationLimits {
    /// Candidates drawn for a single item before the layout is abandoned
    pub max_placement_attempts: u32,
    /// Complete layouts tried before generation fails
    pub max_layout_attempts: u32,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_placement_attempts: 2000,
            max_layout_attempts: 64,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; the host derives one when unset
    pub seed: Option<u64>,

    // === Audio ===
    /// Sound on/off
    pub sounds_enabled: bool,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub effect_volume: f32,

    // === Simulation ===
    /// Combat resolution cadence in milliseconds
    pub combat_interval_ms: f32,
    /// Maximum fixed steps per advance call
    pub max_substeps: u32,
    pub generation: GenerationLimits,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            sounds_enabled: true,
            music_volume: MUSIC_VOLUME,
            effect_volume: 1.0,

            combat_interval_ms: COMBAT_INTERVAL_MS,
            max_substeps: MAX_SUBSTEPS,
            generation: GenerationLimits::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults when absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(GameError::InvalidSettings(format!(
                "music_volume {} outside 0..=1",
                self.music_volume
            )));
        }
        if !(0.0..=1.0).contains(&self.effect_volume) {
            return Err(GameError::InvalidSettings(format!(
                "effect_volume {} outside 0..=1",
                self.effect_volume
            )));
        }
        if !(self.combat_interval_ms > 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "combat_interval_ms must be positive, got {}",
                self.combat_interval_ms
            )));
        }
        if self.max_substeps == 0 {
            return Err(GameError::InvalidSettings("max_substeps must be at least 1".into()));
        }
        if self.generation.max_placement_attempts == 0 || self.generation.max_layout_attempts == 0 {
            return Err(GameError::InvalidSettings(
                "generation attempt limits must be at least 1".into(),
            ));
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
        assert_eq!(settings.combat_interval_ms, 100.0);
        assert_eq!(settings.music_volume, 0.2);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "sounds_enabled": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.sounds_enabled);
        assert_eq!(settings.generation, GenerationLimits::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "music_volume": 3.0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidSettings(_)));
        let err = Settings::from_json(r#"{ "generation": { "max_layout_attempts": 0 } }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidSettings(_)));
        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, GameError::SettingsParse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load("/definitely/not/here/sharkie.json").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
