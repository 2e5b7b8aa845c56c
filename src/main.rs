//! FPS Controller - Entry Point
//!
//! Opens a small test arena with a rigid-body first-person player.
//!
//! Controls:
//! - WASD / Arrows: Move
//! - Mouse: Look around
//! - Space: Jump
//! - F3: Toggle debug readout
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "FPS Controller".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our controller plugin
        .add_plugins(fps_controller::FpsControllerPlugin)

        .run();
}
