//! Player-related components.

use bevy::prelude::*;

use crate::world::SurfaceTag;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Links the player body to the camera it looks through.
///
/// The camera handle is fixed at spawn time; systems look it up instead of
/// searching for a global main camera.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerRig {
    pub camera: Entity,
}

/// The player's camera and its pitch accumulator.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerCamera {
    /// Current pitch in degrees, positive looks up
    pub pitch_degrees: f32,
}

impl PlayerCamera {
    /// Accumulate a pitch change and clamp to `[-limit, limit]`.
    ///
    /// Returns the absolute pitch the camera should now be set to.
    pub fn add_pitch(&mut self, delta_degrees: f32, limit_degrees: f32) -> f32 {
        self.pitch_degrees = (self.pitch_degrees + delta_degrees).clamp(-limit_degrees, limit_degrees);
        self.pitch_degrees
    }

    /// Local camera rotation for the current pitch.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch_degrees.to_radians())
    }
}

/// Grounded and jump gating flags.
///
/// Both start `true`. A jump clears both; only a contact with a
/// [`SurfaceTag::Ground`] surface sets them again. Contacts are not counted,
/// so the most recent qualifying contact wins.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundState {
    pub is_grounded: bool,
    pub can_jump: bool,
}

impl Default for GroundState {
    fn default() -> Self {
        Self {
            is_grounded: true,
            can_jump: true,
        }
    }
}

impl GroundState {
    /// Consume the jump if allowed. Returns whether the jump happens.
    pub fn try_jump(&mut self) -> bool {
        if self.is_grounded && self.can_jump {
            self.is_grounded = false;
            self.can_jump = false;
            true
        } else {
            false
        }
    }

    /// React to a contact-begin with a surface of the given kind.
    ///
    /// Returns `true` if this contact turned an airborne player grounded.
    pub fn on_contact(&mut self, tag: SurfaceTag) -> bool {
        if !tag.is_ground() {
            return false;
        }
        let was_airborne = !self.is_grounded;
        self.is_grounded = true;
        self.can_jump = true;
        was_airborne
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_request_past_limit_is_clamped() {
        let mut camera = PlayerCamera::default();
        assert_eq!(camera.add_pitch(80.0, 60.0), 60.0);
        assert_eq!(camera.add_pitch(-200.0, 60.0), -60.0);
    }

    #[test]
    fn pitch_stays_in_range_for_any_delta_sequence() {
        let mut camera = PlayerCamera::default();
        let deltas = [13.0, 47.5, 90.0, -3.0, -250.0, 0.5, 1000.0, -0.1, -61.0, 33.3];
        for delta in deltas.iter().cycle().take(200) {
            let pitch = camera.add_pitch(*delta, 60.0);
            assert!((-60.0..=60.0).contains(&pitch));
        }
    }

    #[test]
    fn pitch_does_not_overshoot_after_clamping() {
        // Pushing past the limit must not bank extra pitch to unwind later.
        let mut camera = PlayerCamera::default();
        camera.add_pitch(500.0, 60.0);
        assert_eq!(camera.add_pitch(-10.0, 60.0), 50.0);
    }

    #[test]
    fn jump_only_once_per_grounded_period() {
        let mut state = GroundState::default();
        assert!(state.try_jump());
        assert!(!state.is_grounded);
        assert!(!state.can_jump);
        assert!(!state.try_jump());
    }

    #[test]
    fn no_ground_contact_means_no_second_jump() {
        let mut state = GroundState::default();
        assert!(state.try_jump());
        state.on_contact(SurfaceTag::Wall);
        state.on_contact(SurfaceTag::Prop);
        for _ in 0..10 {
            assert!(!state.try_jump());
        }
    }

    #[test]
    fn ground_contact_always_resets_both_flags() {
        let states = [
            GroundState { is_grounded: false, can_jump: false },
            GroundState { is_grounded: true, can_jump: false },
            GroundState { is_grounded: false, can_jump: true },
            GroundState { is_grounded: true, can_jump: true },
        ];
        for mut state in states {
            state.on_contact(SurfaceTag::Ground);
            assert_eq!(state, GroundState::default());
        }
    }

    #[test]
    fn landing_is_reported_only_when_airborne() {
        let mut state = GroundState::default();
        assert!(!state.on_contact(SurfaceTag::Ground));
        state.try_jump();
        assert!(state.on_contact(SurfaceTag::Ground));
        assert!(state.try_jump());
    }
}
