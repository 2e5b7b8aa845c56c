//! Geometry spawning functions for arena construction.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::layout::BlockDef;
use super::materials::MaterialRegistry;

/// Marker for all arena entities that should be cleaned up.
#[derive(Component)]
pub struct ArenaGeometry;

/// Spawn one tagged box with a matching collider.
pub fn spawn_block(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    block: &BlockDef,
) -> Entity {
    let (x, y, z) = block.position;
    let size = Vec3::new(block.size.0, block.size.1, block.size.2);
    let material = mat_registry.get(block.material.as_deref(), block.tag);

    let mut entity = commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(material),
        Transform::from_xyz(x, y, z),
        Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
        block.tag,
        ArenaGeometry,
    ));

    if block.dynamic {
        entity.insert(RigidBody::Dynamic);
    } else {
        entity.insert(RigidBody::Fixed);
    }

    entity.id()
}

/// Set up global ambient light and a directional sun.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.6, 0.65, 0.75),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 0.96, 0.9),
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3, // ~60 degrees down from horizontal
            std::f32::consts::FRAC_PI_6,  // Slight angle for more readable shadows
            0.0,
        )),
        ArenaGeometry,
    ));
}
