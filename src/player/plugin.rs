//! Player plugin - input, look, locomotion, and grounding systems.

use bevy::input::InputSystem;
use bevy::prelude::*;

use super::config::{load_player_config, PlayerConfig};
use super::input::{clear_controller_input, read_controller_input, ControllerInput, MovementAxes};
use super::locomotion::{apply_locomotion, detect_ground_contact, handle_jump};
use super::look::mouse_look;
use crate::core::{GameState, PlayState};

/// Ordering of the variable-rate player systems within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerSet {
    /// Ground contacts from the last physics step
    Contacts,
    /// Yaw and pitch
    Look,
    /// Jump gating
    Jump,
}

/// Player plugin - handles input, camera look, movement and jumping.
///
/// Horizontal velocity is driven from `FixedUpdate`; look and jump run
/// every frame in `Update`.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<PlayerConfig>()
            .init_resource::<ControllerInput>()
            .init_resource::<MovementAxes>()

            // Config
            .add_systems(OnEnter(GameState::Loading), load_player_config)

            // Input sampling
            .add_systems(
                PreUpdate,
                read_controller_input
                    .after(InputSystem)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(OnExit(PlayState::Running), clear_controller_input)

            // System ordering
            .configure_sets(
                Update,
                (PlayerSet::Contacts, PlayerSet::Look, PlayerSet::Jump)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            // Variable-rate systems; contacts are still tracked while paused
            .add_systems(
                Update,
                (
                    detect_ground_contact.in_set(PlayerSet::Contacts),
                    (
                        mouse_look.in_set(PlayerSet::Look),
                        handle_jump.in_set(PlayerSet::Jump),
                    )
                        .run_if(in_state(PlayState::Running)),
                ),
            )

            // Fixed-rate movement; cleared input stops the body while paused
            .add_systems(FixedUpdate, apply_locomotion.run_if(in_state(GameState::InGame)));
    }
}
