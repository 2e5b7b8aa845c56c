//! FPS Controller - a rigid-body first-person character controller for Bevy.
//!
//! # Architecture
//!
//! The crate is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, controller events, cursor handling
//! - **Player**: Input sampling, mouse look, locomotion, jumping, grounding
//! - **World**: Test arena with tagged ground, walls and props
//! - **UI**: Crosshair and debug readout
//!
//! Physics is provided by Rapier; the host app must add
//! `RapierPhysicsPlugin` alongside [`FpsControllerPlugin`].

pub mod core;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins.
pub struct FpsControllerPlugin;

impl Plugin for FpsControllerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
