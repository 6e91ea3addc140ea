use bevy::prelude::*;
use plexus_sim::{FieldState, TrailState};

use super::links::LinkStats;
use super::theme::ThemeState;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Plexus"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.55, 0.75, 0.8, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Update HUD text every 10th frame (string formatting is expensive)
pub fn update_hud(
    field: Res<FieldState>,
    trail: Res<TrailState>,
    theme: Res<ThemeState>,
    links: Res<LinkStats>,
    mut throttle: ResMut<HudThrottle>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };

    let paused = if field.running { "" } else { " [PAUSED]" };
    **text = format!(
        "PLEXUS | {} particles | {} links{}\n\
         Surface: {:.0}×{:.0} | Theme: {} | Trail: {}\n\
         \n\
         [Space] Pause  [T] Theme  [C] Trail  [R] Reseed",
        field.particles.len(),
        links.count,
        paused,
        field.width,
        field.height,
        theme.mode.name(),
        if trail.enabled { "on" } else { "off" },
    );
}
