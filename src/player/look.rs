//! Mouse look - yaw on the player body, clamped pitch on the camera.

use bevy::prelude::*;

use super::components::*;
use super::config::PlayerConfig;
use super::input::ControllerInput;

/// Rotation produced by one frame of pointer input, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookStep {
    /// Positive turns right
    pub yaw_degrees: f32,
    /// Positive looks up
    pub pitch_degrees: f32,
}

/// Scale pointer axes by look speed and frame time.
pub fn look_step(look: Vec2, config: &PlayerConfig, dt: f32) -> LookStep {
    let scale = config.rotation_speed * dt;
    let y_invert = if config.invert_y { -1.0 } else { 1.0 };

    LookStep {
        yaw_degrees: look.x * scale,
        pitch_degrees: look.y * scale * y_invert,
    }
}

/// Handle mouse movement for looking around.
///
/// Rotates the player entity horizontally (yaw) and the camera vertically
/// (pitch). The camera is a child of the player, so yaw affects both. Pitch
/// is written as an absolute rotation from the clamped accumulator, so it
/// never drifts.
pub fn mouse_look(
    input: Res<ControllerInput>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut player_query: Query<(&mut Transform, &PlayerRig), With<Player>>,
    mut camera_query: Query<(&mut Transform, &mut PlayerCamera), Without<Player>>,
) {
    if input.look == Vec2::ZERO {
        return;
    }

    let step = look_step(input.look, &config, time.delta_secs());

    for (mut player_transform, rig) in player_query.iter_mut() {
        // Bevy's positive Y rotation is counter-clockwise seen from above
        player_transform.rotate_y(-step.yaw_degrees.to_radians());

        let Ok((mut camera_transform, mut camera)) = camera_query.get_mut(rig.camera) else {
            continue;
        };
        camera.add_pitch(step.pitch_degrees, config.max_pitch_degrees);
        camera_transform.rotation = camera.rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn look_app(look: Vec2) -> (App, Entity, Entity) {
        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(PlayerConfig::default())
            .insert_resource(ControllerInput { look, ..default() })
            .add_systems(Update, mouse_look);

        let camera = app.world_mut().spawn((Transform::default(), PlayerCamera::default())).id();
        let player = app
            .world_mut()
            .spawn((Player, PlayerRig { camera }, Transform::default()))
            .id();

        app.world_mut().resource_mut::<Time>().advance_by(Duration::from_millis(100));
        (app, player, camera)
    }

    #[test]
    fn step_scales_by_speed_and_frame_time() {
        let config = PlayerConfig::default();
        let step = look_step(Vec2::new(1.0, -0.5), &config, 0.1);
        assert!((step.yaw_degrees - 30.0).abs() < 1e-4);
        assert!((step.pitch_degrees + 15.0).abs() < 1e-4);
    }

    #[test]
    fn invert_y_flips_pitch_only() {
        let config = PlayerConfig {
            invert_y: true,
            ..default()
        };
        let step = look_step(Vec2::new(1.0, 1.0), &config, 0.1);
        assert!(step.yaw_degrees > 0.0);
        assert!(step.pitch_degrees < 0.0);
    }

    #[test]
    fn pointer_right_turns_player_right() {
        let (mut app, player, _) = look_app(Vec2::new(1.0, 0.0));
        app.update();

        let transform = app.world().get::<Transform>(player).unwrap();
        let forward = transform.rotation * Vec3::NEG_Z;
        assert!(forward.x > 0.0);
        assert!(forward.y.abs() < 1e-5);
    }

    #[test]
    fn large_upward_delta_clamps_camera_pitch() {
        // 10 axis units * 300 deg/s * 0.1 s = 300 degrees requested
        let (mut app, _, camera) = look_app(Vec2::new(0.0, 10.0));
        app.update();

        let pitch = app.world().get::<PlayerCamera>(camera).unwrap().pitch_degrees;
        assert_eq!(pitch, 60.0);

        let rotation = app.world().get::<Transform>(camera).unwrap().rotation;
        let expected = Quat::from_rotation_x(60f32.to_radians());
        assert!(rotation.angle_between(expected) < 1e-4);

        let forward = rotation * Vec3::NEG_Z;
        assert!(forward.y > 0.0);
    }

    #[test]
    fn yaw_does_not_touch_camera_pitch() {
        let (mut app, _, camera) = look_app(Vec2::new(5.0, 0.0));
        app.update();

        let camera = app.world().get::<PlayerCamera>(camera).unwrap();
        assert_eq!(camera.pitch_degrees, 0.0);
    }
}
