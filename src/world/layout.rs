//! Arena layout data and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::ArenaLoadError;
use super::tags::SurfaceTag;

/// Default location of the arena layout.
pub const ARENA_PATH: &str = "assets/data/world/arena.ron";

fn default_spawn() -> (f32, f32, f32) {
    (0.0, 1.5, 0.0)
}

/// A single box in the arena.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockDef {
    pub tag: SurfaceTag,
    /// Center of the box
    pub position: (f32, f32, f32),
    /// Full extents of the box
    pub size: (f32, f32, f32),
    #[serde(default)]
    pub material: Option<String>,
    /// Simulated by physics instead of fixed in place
    #[serde(default)]
    pub dynamic: bool,
}

impl BlockDef {
    fn fixed(tag: SurfaceTag, position: (f32, f32, f32), size: (f32, f32, f32)) -> Self {
        Self {
            tag,
            position,
            size,
            material: None,
            dynamic: false,
        }
    }
}

/// Arena layout as read from RON.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct ArenaLayout {
    #[serde(default = "default_spawn")]
    pub player_spawn: (f32, f32, f32),
    pub blocks: Vec<BlockDef>,
}

impl Default for ArenaLayout {
    /// Flat floor, border walls, two platforms and a few crates.
    fn default() -> Self {
        let mut blocks = vec![
            BlockDef::fixed(SurfaceTag::Ground, (0.0, -0.5, 0.0), (40.0, 1.0, 40.0)),
            BlockDef::fixed(SurfaceTag::Wall, (0.0, 2.0, -20.5), (42.0, 4.0, 1.0)),
            BlockDef::fixed(SurfaceTag::Wall, (0.0, 2.0, 20.5), (42.0, 4.0, 1.0)),
            BlockDef::fixed(SurfaceTag::Wall, (-20.5, 2.0, 0.0), (1.0, 4.0, 40.0)),
            BlockDef::fixed(SurfaceTag::Wall, (20.5, 2.0, 0.0), (1.0, 4.0, 40.0)),
            BlockDef::fixed(SurfaceTag::Ground, (6.0, 0.25, -6.0), (4.0, 0.5, 4.0)),
            BlockDef::fixed(SurfaceTag::Ground, (10.0, 0.5, -10.0), (4.0, 1.0, 4.0)),
        ];
        for (x, z) in [(-4.0, -6.0), (-5.5, -6.0), (-4.75, -7.5)] {
            blocks.push(BlockDef {
                material: Some("wood".to_string()),
                dynamic: true,
                ..BlockDef::fixed(SurfaceTag::Prop, (x, 0.5, z), (1.0, 1.0, 1.0))
            });
        }

        Self {
            player_spawn: default_spawn(),
            blocks,
        }
    }
}

impl ArenaLayout {
    /// Load layout from the default RON file, falling back to the built-in arena.
    pub fn load() -> Self {
        match Self::load_from(ARENA_PATH) {
            Ok(layout) => {
                info!("Loaded arena layout from {} ({} blocks)", ARENA_PATH, layout.blocks.len());
                layout
            }
            Err(e @ ArenaLoadError::FileNotFound(_)) => {
                warn!("{}. Using built-in arena.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using built-in arena.", e);
                Self::default()
            }
        }
    }

    /// Load and validate a layout from a RON file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ArenaLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ArenaLoadError::FileNotFound(display.clone()),
            _ => ArenaLoadError::ReadError {
                path: display.clone(),
                details: e.to_string(),
            },
        })?;

        let layout: Self = ron::from_str(&contents).map_err(|e| ArenaLoadError::ParseError {
            path: display,
            details: e.to_string(),
        })?;
        layout.validate()?;
        Ok(layout)
    }

    /// Every block needs a positive size and at least one must be ground.
    pub fn validate(&self) -> Result<(), ArenaLoadError> {
        for (index, block) in self.blocks.iter().enumerate() {
            let (x, y, z) = block.size;
            if !(x > 0.0 && y > 0.0 && z > 0.0) {
                return Err(ArenaLoadError::InvalidBlockSize { index, size: block.size });
            }
        }
        if !self.blocks.iter().any(|block| block.tag.is_ground()) {
            return Err(ArenaLoadError::NoGround);
        }
        Ok(())
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::new(self.player_spawn.0, self.player_spawn.1, self.player_spawn.2)
    }
}

/// System to load the arena layout when the game starts loading.
pub fn load_arena_layout(mut commands: Commands) {
    commands.insert_resource(ArenaLayout::load());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_arena_is_valid() {
        assert!(ArenaLayout::default().validate().is_ok());
    }

    #[test]
    fn shipped_arena_parses() {
        let contents = include_str!("../../assets/data/world/arena.ron");
        let layout: ArenaLayout = ron::from_str(contents).unwrap();
        assert!(layout.validate().is_ok());
        assert!(layout.blocks.iter().any(|block| block.dynamic));
    }

    #[test]
    fn layout_without_ground_is_rejected() {
        let layout = ArenaLayout {
            player_spawn: default_spawn(),
            blocks: vec![BlockDef::fixed(SurfaceTag::Wall, (0.0, 0.0, 0.0), (1.0, 1.0, 1.0))],
        };
        assert!(matches!(layout.validate(), Err(ArenaLoadError::NoGround)));
    }

    #[test]
    fn flat_block_is_rejected() {
        let layout = ArenaLayout {
            player_spawn: default_spawn(),
            blocks: vec![BlockDef::fixed(SurfaceTag::Ground, (0.0, 0.0, 0.0), (10.0, 0.0, 10.0))],
        };
        assert!(matches!(
            layout.validate(),
            Err(ArenaLoadError::InvalidBlockSize { index: 0, .. })
        ));
    }
}
