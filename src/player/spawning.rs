//! Player spawning and rig validation.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::config::PlayerConfig;
use super::error::ControllerError;

/// Spawn the player body with its camera and return the body entity.
pub fn spawn_player(commands: &mut Commands, position: Vec3, config: &PlayerConfig) -> Entity {
    let player = commands
        .spawn((
            Player,
            GroundState::default(),
            // Transform
            Transform::from_translation(position),
            Visibility::default(),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::capsule_y(config.capsule_half_height, config.capsule_radius),
            ColliderMassProperties::Mass(config.mass),
            // Keep the capsule upright; yaw comes from mouse look
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            ExternalImpulse::default(),
            // No friction so walls don't hold the player in mid-air
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
            ActiveEvents::COLLISION_EVENTS,
            Ccd::enabled(),
        ))
        .id();

    // Spawn camera as child of player
    let mut camera = Entity::PLACEHOLDER;
    commands.entity(player).with_children(|parent| {
        camera = parent
            .spawn((
                Camera3d::default(),
                PlayerCamera::default(),
                // Position camera at "eye level" relative to player
                Transform::from_xyz(0.0, config.eye_height, 0.0),
            ))
            .id();
    });
    commands.entity(player).insert(PlayerRig { camera });

    info!("Spawned player {:?} at {}", player, position);
    player
}

/// Check that every player carries what the controller drives.
///
/// A player without a dynamic body or a reachable camera would otherwise
/// sit still silently, so this is meant to be piped into
/// [`handle_rig_error`] right after spawning.
pub fn verify_player_rig(
    players: Query<
        (Entity, Option<&PlayerRig>, Option<&RigidBody>, Has<Velocity>, Has<ExternalImpulse>),
        With<Player>,
    >,
    cameras: Query<(), With<PlayerCamera>>,
) -> Result<(), ControllerError> {
    for (player, rig, body, has_velocity, has_impulse) in players.iter() {
        // Rapier ignores velocity and impulses on anything but a dynamic body
        let is_dynamic = matches!(body, Some(RigidBody::Dynamic));
        if !is_dynamic || !has_velocity || !has_impulse {
            return Err(ControllerError::MissingRigidBody(player));
        }

        let camera = rig.map(|rig| rig.camera).unwrap_or(Entity::PLACEHOLDER);
        if !cameras.contains(camera) {
            return Err(ControllerError::MissingCamera { player, camera });
        }
    }
    Ok(())
}

/// Stop the app loudly if the player rig is incomplete.
pub fn handle_rig_error(In(result): In<Result<(), ControllerError>>, mut exit: EventWriter<AppExit>) {
    if let Err(e) = result {
        error!("Player rig is incomplete: {}", e);
        exit.send(AppExit::error());
    }
}
