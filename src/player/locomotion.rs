//! Locomotion - camera-relative movement, jumping, and ground contacts.
//!
//! Horizontal velocity is written every fixed step; the vertical component
//! is left to Rapier so gravity keeps integrating. Jumps are edge-triggered
//! impulses gated by [`GroundState`].

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;

use super::components::*;
use super::config::PlayerConfig;
use super::input::ControllerInput;
use crate::core::{PlayerJumped, PlayerLanded};
use crate::world::SurfaceTag;

/// Flatten a direction onto the ground plane and renormalize.
///
/// Returns zero when nothing is left after flattening (looking straight
/// up or down) instead of producing NaN.
pub fn planar(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero()
}

/// Camera-relative movement direction on the ground plane.
///
/// `axes.x` strafes along `right`, `axes.y` moves along `forward`. The
/// result is rescaled to unit length only if it is longer than one, so
/// diagonal input is no faster than straight input while partial input
/// still moves slower.
pub fn movement_direction(forward: Vec3, right: Vec3, axes: Vec2) -> Vec3 {
    let direction = planar(forward) * axes.y + planar(right) * axes.x;
    if direction.length_squared() > 1.0 {
        direction.normalize()
    } else {
        direction
    }
}

/// Replace the horizontal part of `current` with `direction * speed`.
pub fn horizontal_velocity(current: Vec3, direction: Vec3, speed: f32) -> Vec3 {
    Vec3::new(direction.x * speed, current.y, direction.z * speed)
}

/// Drive the player's horizontal velocity from the movement axes.
///
/// Runs in `FixedUpdate`. Facing is the camera's rotation composed with
/// the body's yaw.
pub fn apply_locomotion(
    input: Res<ControllerInput>,
    config: Res<PlayerConfig>,
    mut player_query: Query<(&Transform, &PlayerRig, &mut Velocity), With<Player>>,
    camera_query: Query<&Transform, (With<PlayerCamera>, Without<Player>)>,
) {
    for (player_transform, rig, mut velocity) in player_query.iter_mut() {
        let Ok(camera_transform) = camera_query.get(rig.camera) else {
            continue;
        };

        let facing = player_transform.rotation * camera_transform.rotation;
        let direction = movement_direction(facing * Vec3::NEG_Z, facing * Vec3::X, input.movement);

        velocity.linvel = horizontal_velocity(velocity.linvel, direction, config.move_speed);
    }
}

/// Apply a jump impulse on the jump key edge if grounded.
pub fn handle_jump(
    input: Res<ControllerInput>,
    config: Res<PlayerConfig>,
    mut player_query: Query<(Entity, &mut GroundState, &mut ExternalImpulse), With<Player>>,
    mut jumped: EventWriter<PlayerJumped>,
) {
    if !input.jump_pressed {
        return;
    }

    for (entity, mut ground, mut external) in player_query.iter_mut() {
        if !ground.try_jump() {
            continue;
        }

        let impulse = Vec3::Y * config.jump_impulse;
        external.impulse += impulse;
        debug!("Player {:?} jumped with impulse {}", entity, impulse);
        jumped.send(PlayerJumped { player: entity, impulse });
    }
}

/// Reset the jump flags when the player starts touching ground.
///
/// Only contact-begin events count. Leaving a surface is not tracked, and
/// several simultaneous contacts are not counted: the latest ground contact
/// simply sets both flags.
pub fn detect_ground_contact(
    mut collisions: EventReader<CollisionEvent>,
    mut player_query: Query<&mut GroundState, With<Player>>,
    surfaces: Query<&SurfaceTag>,
    mut landed: EventWriter<PlayerLanded>,
) {
    for event in collisions.read() {
        let &CollisionEvent::Started(a, b, flags) = event else {
            continue;
        };
        if flags.contains(CollisionEventFlags::SENSOR) {
            continue;
        }

        let (player, other) = if player_query.contains(a) {
            (a, b)
        } else if player_query.contains(b) {
            (b, a)
        } else {
            continue;
        };

        let Ok(tag) = surfaces.get(other) else {
            continue;
        };
        let Ok(mut ground) = player_query.get_mut(player) else {
            continue;
        };

        if ground.on_contact(*tag) {
            debug!("Player {:?} landed on {:?}", player, other);
            landed.send(PlayerLanded { player, surface: other });
        }
    }
}
