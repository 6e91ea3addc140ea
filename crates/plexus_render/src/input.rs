use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow, WindowResized};
use plexus_core::PointerSample;
use plexus_sim::{FieldState, TrailState};

/// Seed the field from the initial window size
pub fn initial_surface_system(
    window_q: Query<&Window, With<PrimaryWindow>>,
    mut field: ResMut<FieldState>,
) {
    let Ok(window) = window_q.get_single() else {
        return;
    };
    field.handle_resize(window.width(), window.height());
}

/// Forward window resizes to the simulator (full reseed, never a patch)
pub fn resize_system(mut events: EventReader<WindowResized>, mut field: ResMut<FieldState>) {
    // Only the final size of the frame matters
    if let Some(resized) = events.read().last() {
        field.handle_resize(resized.width, resized.height);
    }
}

/// Forward pointer events to the simulator and the trail
///
/// Window cursor coordinates are origin top-left with y down, the same
/// space the field simulates in, so samples pass through untranslated.
pub fn pointer_system(
    mut left: EventReader<CursorLeft>,
    mut moved: EventReader<CursorMoved>,
    mut field: ResMut<FieldState>,
    mut trail: ResMut<TrailState>,
) {
    if !left.is_empty() {
        left.clear();
        field.handle_pointer_left();
    }

    for ev in moved.read() {
        field.handle_pointer_move(ev.position.x, ev.position.y);
        if trail.enabled {
            trail.push(PointerSample {
                x: ev.position.x,
                y: ev.position.y,
            });
        }
    }
}
