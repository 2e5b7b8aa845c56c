//! UI module - pause overlay, crosshair and debug readout.

mod hud;
mod plugin;

pub use hud::DebugReadout;
pub use plugin::UiPlugin;
