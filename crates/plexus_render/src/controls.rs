use bevy::prelude::*;
use plexus_sim::{FieldState, TrailState};
use plexus_storage::Preferences;

use super::theme::ThemeState;

/// Keyboard controls: [Space] pause, [T] theme, [C] trail, [R] reseed
pub fn control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut field: ResMut<FieldState>,
    mut trail: ResMut<TrailState>,
    mut theme: ResMut<ThemeState>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        if field.running {
            field.stop();
        } else {
            field.resume();
        }
        info!("Field {}", if field.running { "resumed" } else { "paused" });
    }

    if keyboard.just_pressed(KeyCode::KeyT) {
        theme.mode = theme.mode.toggled();
        let prefs = Preferences { theme: theme.mode };
        match plexus_storage::save_preferences(&prefs, &plexus_storage::default_path()) {
            Ok(()) => info!("Theme switched to {}", theme.mode.name()),
            Err(e) => error!("Failed to persist theme: {e}"),
        }
    }

    if keyboard.just_pressed(KeyCode::KeyC) {
        trail.enabled = !trail.enabled;
        if !trail.enabled {
            trail.clear();
        }
        info!("Trail {}", if trail.enabled { "on" } else { "off" });
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        field.reseed();
    }
}
