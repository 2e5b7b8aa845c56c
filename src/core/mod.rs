//! Core module - states, events, and cursor handling.
//!
//! This module provides the foundation that the player, world and UI
//! plugins build upon.

mod events;
mod plugin;
mod states;

pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
