//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Player look,
//! movement and jumping only run while `PlayState::Running` is active.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while the controller config is read
/// - Enter `InGame` once loading completes
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - reading data files
    #[default]
    Loading,
    /// Arena is built and the player exists
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
///
/// Pausing keeps the arena and player alive but freezes the controller.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Controller receives input
    #[default]
    Running,
    /// Controller frozen, cursor released
    Paused,
}
