//! In-game HUD - crosshair and controller debug readout.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

use crate::core::GameState;
use crate::player::{GroundState, Player, PlayerCamera, PlayerRig};

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Text node showing the controller state. Toggled with F3.
#[derive(Component)]
pub struct DebugReadout;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (toggle_debug_readout, update_debug_readout)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Debug readout (top-left corner), hidden until toggled
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        Visibility::Hidden,
        DebugReadout,
        HudRoot,
    ));

    // Crosshair (center of screen)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            // Crosshair dot
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
            ));
        });
}

/// Format the readout for one player.
fn readout_text(ground: &GroundState, pitch_degrees: f32, velocity: Vec3) -> String {
    let horizontal_speed = Vec2::new(velocity.x, velocity.z).length();
    format!(
        "grounded: {}\ncan jump: {}\npitch: {:.1}\nspeed: {:.2}\nvertical: {:.2}",
        ground.is_grounded, ground.can_jump, pitch_degrees, horizontal_speed, velocity.y
    )
}

/// Show or hide the debug readout with F3.
fn toggle_debug_readout(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut Visibility, With<DebugReadout>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }
    for mut visibility in query.iter_mut() {
        *visibility = match *visibility {
            Visibility::Hidden => Visibility::Inherited,
            _ => Visibility::Hidden,
        };
    }
}

/// Refresh the readout from the player's controller state.
fn update_debug_readout(
    player_query: Query<(&GroundState, &PlayerRig, &Velocity), With<Player>>,
    camera_query: Query<&PlayerCamera>,
    mut text_query: Query<(&mut Text, &Visibility), With<DebugReadout>>,
) {
    let Ok((ground, rig, velocity)) = player_query.get_single() else {
        return;
    };
    let Ok((mut text, visibility)) = text_query.get_single_mut() else {
        return;
    };
    if *visibility == Visibility::Hidden {
        return;
    }

    let pitch = camera_query.get(rig.camera).map(|camera| camera.pitch_degrees).unwrap_or(0.0);
    text.0 = readout_text(ground, pitch, velocity.linvel);
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_reports_flags_and_horizontal_speed() {
        let ground = GroundState {
            is_grounded: false,
            can_jump: false,
        };
        let text = readout_text(&ground, -12.34, Vec3::new(3.0, -1.5, 4.0));
        assert!(text.contains("grounded: false"));
        assert!(text.contains("can jump: false"));
        assert!(text.contains("pitch: -12.3"));
        assert!(text.contains("speed: 5.00"));
        assert!(text.contains("vertical: -1.50"));
    }
}
