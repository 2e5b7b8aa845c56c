//! UI plugin - pause overlay and HUD.

use bevy::prelude::*;

use super::hud;
use crate::core::PlayState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Pause overlay
            .add_systems(OnEnter(PlayState::Paused), setup_pause_overlay)
            .add_systems(OnExit(PlayState::Paused), cleanup_pause_overlay);
    }
}

/// Marker for pause overlay UI entities.
#[derive(Component)]
struct PauseOverlayUi;

/// Spawn the pause overlay.
fn setup_pause_overlay(mut commands: Commands) {
    // Semi-transparent overlay
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            PauseOverlayUi,
        ))
        .with_children(|parent| {
            // Title
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press Esc to resume"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.65)),
            ));
        });
}

/// Clean up pause overlay entities.
fn cleanup_pause_overlay(mut commands: Commands, query: Query<Entity, With<PauseOverlayUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
