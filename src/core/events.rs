//! Controller events used for cross-system communication.
//!
//! The locomotion systems emit these on every jump and landing. They are
//! hooks for code outside the controller; nothing in this crate reads them,
//! so consumers never need to touch the grounded flags themselves.

use bevy::prelude::*;

/// Sent when the player leaves the ground through a jump.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PlayerJumped {
    /// The player entity
    pub player: Entity,
    /// Impulse applied to the rigid body
    pub impulse: Vec3,
}

/// Sent when an airborne player touches a ground surface again.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLanded {
    /// The player entity
    pub player: Entity,
    /// The ground entity that was touched
    pub surface: Entity,
}
