//! Core plugin that sets up game states, events, and cursor handling.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the Running/Paused sub-state
/// - Controller events (PlayerJumped, PlayerLanded)
/// - Cursor grab while running
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register controller events
            .add_event::<PlayerJumped>()
            .add_event::<PlayerLanded>()

            // Loading state - config is read on enter, gameplay starts next frame
            .add_systems(OnEnter(GameState::Loading), finish_loading)

            // Cursor is only captured while the controller runs
            .add_systems(OnEnter(PlayState::Running), grab_cursor)
            .add_systems(OnExit(PlayState::Running), release_cursor)

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input.run_if(in_state(GameState::InGame)));
    }
}

/// Transition from Loading to InGame.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Grab and hide cursor when gameplay resumes.
fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when gameplay stops.
fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Running => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Running),
        }
    }
}
