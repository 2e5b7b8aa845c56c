//! Player module - input, mouse look, locomotion, and spawning.

mod components;
mod config;
mod error;
mod input;
mod locomotion;
mod look;
mod plugin;
mod spawning;

pub use components::*;
pub use config::{load_player_config, PlayerConfig, CONFIG_PATH};
pub use error::ControllerError;
pub use input::{ControllerInput, InputAxis, MovementAxes};
pub use locomotion::{horizontal_velocity, movement_direction, planar};
pub use look::{look_step, LookStep};
pub use plugin::{PlayerPlugin, PlayerSet};
pub use spawning::{handle_rig_error, spawn_player, verify_player_rig};
