use bevy::prelude::*;
use plexus_sim::{FieldState, TrailState};

use super::camera::surface_to_world;
use super::theme::{palette_color, ThemeState};

/// Link count from the latest frame, for the HUD
#[derive(Resource, Default)]
pub struct LinkStats {
    pub count: usize,
}

/// Draw the frame's connective edges
///
/// Stroke alpha is the field's distance falloff times the theme's link
/// opacity factor; a pair at the cutoff distance has zero falloff and is
/// simply not emitted.
pub fn draw_links(
    mut gizmos: Gizmos,
    field: Res<FieldState>,
    theme: Res<ThemeState>,
    mut stats: ResMut<LinkStats>,
) {
    let palette = theme.palette();
    let base = palette_color(palette.link);

    let links = field.links();
    stats.count = links.len();

    for link in links {
        let a = surface_to_world(link.ax, link.ay, field.width, field.height);
        let b = surface_to_world(link.bx, link.by, field.width, field.height);
        gizmos.line_2d(a, b, base.with_alpha(link.strength * palette.link_opacity));
    }
}

/// Draw the pointer trail as fading segments, newest brightest
pub fn draw_trail(
    mut gizmos: Gizmos,
    field: Res<FieldState>,
    trail: Res<TrailState>,
    theme: Res<ThemeState>,
) {
    if !trail.enabled || trail.points.len() < 2 {
        return;
    }

    let palette = theme.palette();
    let base = palette_color(palette.link);
    let capacity = trail.capacity() as f32;

    for (i, pair) in trail.points.windows(2).enumerate() {
        let a = surface_to_world(pair[0].x, pair[0].y, field.width, field.height);
        let b = surface_to_world(pair[1].x, pair[1].y, field.width, field.height);
        let fade = (i + 1) as f32 / capacity;
        gizmos.line_2d(a, b, base.with_alpha(fade * 0.5));
    }
}
