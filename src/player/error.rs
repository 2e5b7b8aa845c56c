//! Error types for controller config loading and rig validation.

use bevy::prelude::Entity;
use thiserror::Error;

/// Errors that can occur when loading the controller config or checking
/// that a spawned player has everything the controller drives.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Config file could not be found.
    #[error("Config not found: {0}")]
    ConfigNotFound(String),

    /// Config file could not be read.
    #[error("Failed to read config '{path}': {details}")]
    ConfigRead { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ConfigParse { path: String, details: String },

    /// A config value is out of range.
    #[error("Invalid config value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Player has no dynamic rigid body with velocity/impulse to drive.
    #[error("Player {0:?} has no dynamic rigid body (RigidBody::Dynamic + Velocity + ExternalImpulse)")]
    MissingRigidBody(Entity),

    /// Player's camera handle does not point at a player camera.
    #[error("Player {player:?} camera {camera:?} is missing or has no PlayerCamera")]
    MissingCamera { player: Entity, camera: Entity },
}
