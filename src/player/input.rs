//! Input sampling - turns keyboard and mouse state into controller axes.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use super::config::PlayerConfig;
use crate::core::PlayState;

/// Per-frame controller input, rebuilt every frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ControllerInput {
    /// Strafe (x) and forward/back (y), each in [-1, 1]
    pub movement: Vec2,
    /// Pointer delta in axis units, positive y looks up
    pub look: Vec2,
    /// Jump key went down this frame
    pub jump_pressed: bool,
}

/// Smoothed movement axes carried between frames.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementAxes {
    pub horizontal: InputAxis,
    pub vertical: InputAxis,
}

/// A virtual axis that ramps toward its raw target instead of jumping.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InputAxis {
    pub value: f32,
}

impl InputAxis {
    /// Advance toward `raw` (-1, 0 or 1).
    ///
    /// Rises at `sensitivity` units/s, falls back to rest at `gravity`
    /// units/s, and snaps through zero when the target reverses.
    pub fn step(&mut self, raw: f32, sensitivity: f32, gravity: f32, dt: f32) -> f32 {
        if raw == 0.0 {
            let fall = gravity * dt;
            self.value = if self.value.abs() <= fall {
                0.0
            } else {
                self.value - fall * self.value.signum()
            };
        } else {
            if self.value != 0.0 && self.value.signum() != raw.signum() {
                self.value = 0.0;
            }
            self.value = (self.value + raw * sensitivity * dt).clamp(-1.0, 1.0);
        }
        self.value
    }
}

/// Raw -1/0/1 value from a pair of opposing key sets.
fn key_axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

/// Sample keyboard and mouse into [`ControllerInput`].
///
/// Runs while paused too, so mouse motion from the pause is consumed here
/// and never reaches the camera on resume.
pub fn read_controller_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    play_state: Res<State<PlayState>>,
    mut axes: ResMut<MovementAxes>,
    mut input: ResMut<ControllerInput>,
) {
    if *play_state.get() != PlayState::Running {
        mouse_motion.clear();
        return;
    }

    let dt = time.delta_secs();

    let raw_x = key_axis(&keyboard, [KeyCode::KeyA, KeyCode::ArrowLeft], [KeyCode::KeyD, KeyCode::ArrowRight]);
    let raw_y = key_axis(&keyboard, [KeyCode::KeyS, KeyCode::ArrowDown], [KeyCode::KeyW, KeyCode::ArrowUp]);

    let horizontal = axes.horizontal.step(raw_x, config.axis_sensitivity, config.axis_gravity, dt);
    let vertical = axes.vertical.step(raw_y, config.axis_sensitivity, config.axis_gravity, dt);

    // Accumulate mouse movement
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }

    // Screen space grows downward; look axis is positive when looking up
    let look = Vec2::new(delta.x, -delta.y) * config.pointer_axis_scale;

    *input = ControllerInput {
        movement: Vec2::new(horizontal, vertical),
        look,
        jump_pressed: keyboard.just_pressed(KeyCode::Space),
    };
}

/// Drop held input when pausing so the body stops.
pub fn clear_controller_input(mut axes: ResMut<MovementAxes>, mut input: ResMut<ControllerInput>) {
    *axes = MovementAxes::default();
    *input = ControllerInput::default();
}
