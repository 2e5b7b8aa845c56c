//! World module - test arena with tagged surfaces.

mod error;
mod geometry;
mod layout;
mod materials;
mod plugin;
mod tags;

pub use error::ArenaLoadError;
pub use geometry::ArenaGeometry;
pub use layout::{ArenaLayout, BlockDef, ARENA_PATH};
pub use plugin::{setup_arena, WorldPlugin};
pub use tags::SurfaceTag;
