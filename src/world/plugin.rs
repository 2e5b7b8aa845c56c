//! World plugin - arena loading, building, and teardown.

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::{handle_rig_error, spawn_player, verify_player_rig, Player, PlayerConfig};

use super::geometry::{spawn_block, spawn_lighting, ArenaGeometry};
use super::layout::{load_arena_layout, ArenaLayout};
use super::materials::MaterialRegistry;

/// World plugin - handles arena setup and cleanup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaLayout>()
            .add_systems(OnEnter(GameState::Loading), load_arena_layout)
            .add_systems(
                OnEnter(GameState::InGame),
                (setup_arena, verify_player_rig.pipe(handle_rig_error)).chain(),
            )
            .add_systems(OnExit(GameState::InGame), cleanup_arena);
    }
}

/// Build the arena from the layout and spawn the player.
pub fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<ArenaLayout>,
    config: Res<PlayerConfig>,
) {
    info!("Building arena: {} blocks", layout.blocks.len());

    let mat_registry = MaterialRegistry::new(&mut materials);
    spawn_lighting(&mut commands);
    for block in &layout.blocks {
        spawn_block(&mut commands, &mut meshes, &mat_registry, block);
    }

    spawn_player(&mut commands, layout.spawn_position(), &config);
}

/// Clean up arena entities when leaving InGame state.
fn cleanup_arena(
    mut commands: Commands,
    arena_query: Query<Entity, With<ArenaGeometry>>,
    player_query: Query<Entity, With<Player>>,
) {
    for entity in arena_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
