//! Simulation settings
//!
//! Loaded from an optional JSON file; every field falls back to the
//! constants in [`crate::consts`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Arena, CollisionMode, MotionParams};

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Inclusive range used for spawn draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Loop ===
    /// Caps created at startup
    pub caps_spawned: usize,
    /// Frame rate cap
    pub max_fps: u32,

    // === Motion ===
    pub max_speed: f32,
    /// Acceleration applied while moving (negative)
    pub deceleration: f32,

    // === Mouse impulse ===
    pub impulse_falloff_radius: f32,
    pub impulse_strength: f32,

    // === Spawning ===
    pub spawn_speed: Span,
    pub spawn_radius: Span,

    // === Collisions ===
    pub collision_mode: CollisionMode,

    // === Debug ===
    /// Start with the debug overlay on
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            caps_spawned: CAPS_SPAWNED,
            max_fps: MAX_FPS,

            max_speed: MAX_SPEED,
            deceleration: DECELERATION,

            impulse_falloff_radius: IMPULSE_FALLOFF_RADIUS,
            impulse_strength: IMPULSE_STRENGTH,

            spawn_speed: Span::new(SPAWN_SPEED_MIN, SPAWN_SPEED_MAX),
            spawn_radius: Span::new(SPAWN_RADIUS_MIN, SPAWN_RADIUS_MAX),

            collision_mode: CollisionMode::OrderedPairs,

            debug: false,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arena must have positive size, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if self.max_fps == 0 {
            return Err(ConfigError::Invalid("max_fps must be at least 1".into()));
        }
        if !(self.max_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_speed must be non-negative, got {}",
                self.max_speed
            )));
        }
        if !(self.deceleration <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "deceleration must be zero or negative, got {}",
                self.deceleration
            )));
        }
        if !(self.impulse_falloff_radius >= 0.0 && self.impulse_strength >= 0.0) {
            return Err(ConfigError::Invalid(
                "impulse falloff radius and strength must be non-negative".into(),
            ));
        }

        let Span { min, max } = self.spawn_radius;
        if !(MIN_RADIUS <= min && min <= max && max <= MAX_RADIUS) {
            return Err(ConfigError::Invalid(format!(
                "spawn_radius must lie within [{MIN_RADIUS}, {MAX_RADIUS}], got [{min}, {max}]"
            )));
        }
        if !self.arena().fits(max) {
            return Err(ConfigError::Invalid(format!(
                "arena {}x{} is too small for radius {max}",
                self.arena_width, self.arena_height
            )));
        }

        let Span { min, max } = self.spawn_speed;
        if !(0.0 <= min && min <= max && max <= self.max_speed) {
            return Err(ConfigError::Invalid(format!(
                "spawn_speed must lie within [0, {}], got [{min}, {max}]",
                self.max_speed
            )));
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            max_speed: self.max_speed,
            deceleration: self.deceleration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        Settings::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "caps_spawned": 10, "collision_mode": "unordered_pairs" }"#)
                .unwrap();
        assert_eq!(settings.caps_spawned, 10);
        assert_eq!(settings.collision_mode, CollisionMode::UnorderedPairs);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.max_speed, MAX_SPEED);
    }

    #[test]
    fn test_radius_out_of_range_rejected() {
        let err = Settings::from_json(r#"{ "spawn_radius": { "min": 8, "max": 32 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_arena_too_small_rejected() {
        let err = Settings::from_json(
            r#"{ "arena_width": 100, "arena_height": 100, "spawn_radius": { "min": 16, "max": 64 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ caps_spawned: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(Path::new("/nonexistent/caps-settings.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
