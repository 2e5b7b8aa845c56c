//! Surface classification for contact handling.

use bevy::prelude::*;
use serde::Deserialize;

/// What kind of surface a collider represents.
///
/// Only [`SurfaceTag::Ground`] lets the player land and jump again.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SurfaceTag {
    Ground,
    Wall,
    Prop,
}

impl SurfaceTag {
    /// Whether touching this surface grounds the player.
    pub fn is_ground(self) -> bool {
        matches!(self, SurfaceTag::Ground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ground_qualifies() {
        assert!(SurfaceTag::Ground.is_ground());
        assert!(!SurfaceTag::Wall.is_ground());
        assert!(!SurfaceTag::Prop.is_ground());
    }
}
