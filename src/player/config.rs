//! Controller configuration loaded from an external RON file.
//!
//! Allows tweaking speeds, sensitivity and body shape without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::ControllerError;

/// Default location of the controller config.
pub const CONFIG_PATH: &str = "assets/data/player/controller.ron";

/// Configuration for the first-person controller.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal movement speed in units per second
    pub move_speed: f32,
    /// Look speed in degrees per pointer axis unit per second
    pub rotation_speed: f32,
    /// Converts raw mouse pixels into pointer axis units
    pub pointer_axis_scale: f32,
    /// Invert Y-axis for mouse look
    pub invert_y: bool,
    /// Camera pitch limit in degrees, applied symmetrically
    pub max_pitch_degrees: f32,
    /// Upward impulse applied on jump
    pub jump_impulse: f32,
    /// Body mass, so the impulse maps to a predictable take-off speed
    pub mass: f32,
    /// How fast movement axes ramp toward a held key (units/s)
    pub axis_sensitivity: f32,
    /// How fast movement axes fall back to rest (units/s)
    pub axis_gravity: f32,
    /// Camera height above the body's center
    pub eye_height: f32,
    pub capsule_half_height: f32,
    pub capsule_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 7.0,
            rotation_speed: 300.0,
            pointer_axis_scale: 0.1,
            invert_y: false,
            max_pitch_degrees: 60.0,
            jump_impulse: 3.0,
            mass: 1.0,
            axis_sensitivity: 3.0,
            axis_gravity: 3.0,
            eye_height: 0.6,
            capsule_half_height: 0.5,
            capsule_radius: 0.4,
        }
    }
}

impl PlayerConfig {
    /// Load config from the default RON file, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded controller config from {}", CONFIG_PATH);
                config
            }
            Err(e @ ControllerError::ConfigNotFound(_)) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a RON file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ControllerError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ControllerError::ConfigNotFound(display.clone()),
            _ => ControllerError::ConfigRead {
                path: display.clone(),
                details: e.to_string(),
            },
        })?;

        Self::from_ron(&contents).map_err(|e| match e {
            ControllerError::ConfigParse { details, .. } => ControllerError::ConfigParse {
                path: display,
                details,
            },
            other => other,
        })
    }

    /// Parse and validate config from RON text.
    pub fn from_ron(contents: &str) -> Result<Self, ControllerError> {
        let config: Self = ron::from_str(contents).map_err(|e| ControllerError::ConfigParse {
            path: "<inline>".to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot work with.
    pub fn validate(&self) -> Result<(), ControllerError> {
        let non_negative = [
            ("move_speed", self.move_speed),
            ("rotation_speed", self.rotation_speed),
            ("pointer_axis_scale", self.pointer_axis_scale),
            ("jump_impulse", self.jump_impulse),
            ("axis_sensitivity", self.axis_sensitivity),
            ("axis_gravity", self.axis_gravity),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ControllerError::InvalidConfig {
                    field,
                    reason: format!("expected a finite value >= 0, got {}", value),
                });
            }
        }

        let positive = [
            ("mass", self.mass),
            ("capsule_half_height", self.capsule_half_height),
            ("capsule_radius", self.capsule_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ControllerError::InvalidConfig {
                    field,
                    reason: format!("expected a finite value > 0, got {}", value),
                });
            }
        }

        if !(self.max_pitch_degrees > 0.0 && self.max_pitch_degrees < 90.0) {
            return Err(ControllerError::InvalidConfig {
                field: "max_pitch_degrees",
                reason: format!("must be inside (0, 90), got {}", self.max_pitch_degrees),
            });
        }

        if !self.eye_height.is_finite() {
            return Err(ControllerError::InvalidConfig {
                field: "eye_height",
                reason: "must be finite".to_string(),
            });
        }

        Ok(())
    }
}

/// System to load the controller config when the game starts loading.
pub fn load_player_config(mut commands: Commands) {
    commands.insert_resource(PlayerConfig::load());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlayerConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = PlayerConfig::from_ron("(move_speed: 4.5, invert_y: true)").unwrap();
        assert_eq!(config.move_speed, 4.5);
        assert!(config.invert_y);
        assert_eq!(config.max_pitch_degrees, 60.0);
        assert_eq!(config.jump_impulse, 3.0);
    }

    #[test]
    fn shipped_config_parses() {
        let contents = include_str!("../../assets/data/player/controller.ron");
        let config = PlayerConfig::from_ron(contents).unwrap();
        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn rejects_pitch_limit_outside_range() {
        let err = PlayerConfig::from_ron("(max_pitch_degrees: 95.0)").unwrap_err();
        assert!(matches!(
            err,
            ControllerError::InvalidConfig { field: "max_pitch_degrees", .. }
        ));
    }

    #[test]
    fn rejects_negative_speed() {
        let err = PlayerConfig::from_ron("(move_speed: -1.0)").unwrap_err();
        assert!(matches!(err, ControllerError::InvalidConfig { field: "move_speed", .. }));
    }

    #[test]
    fn rejects_zero_mass() {
        let err = PlayerConfig::from_ron("(mass: 0.0)").unwrap_err();
        assert!(matches!(err, ControllerError::InvalidConfig { field: "mass", .. }));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = PlayerConfig::from_ron("(move_speed: )").unwrap_err();
        assert!(matches!(err, ControllerError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = PlayerConfig::load_from("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ControllerError::ConfigNotFound(_)));
    }
}
