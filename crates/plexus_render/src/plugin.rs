use bevy::prelude::*;
use plexus_sim::pipeline::field_tick;

use super::backdrop;
use super::camera;
use super::controls;
use super::hud;
use super::input;
use super::links;
use super::particles;

/// Main render plugin for the plexus background
pub struct PlexusRenderPlugin;

impl Plugin for PlexusRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<hud::HudThrottle>()
            .init_resource::<links::LinkStats>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    particles::setup_dot_assets,
                    hud::spawn_hud,
                    input::initial_surface_system,
                ),
            )
            .add_systems(
                Update,
                (
                    // Event intake lands before the tick so a frame's
                    // update sees this frame's pointer and surface size
                    (
                        input::pointer_system,
                        input::resize_system,
                        controls::control_system,
                    )
                        .before(field_tick),
                    (
                        particles::sync_particle_visuals,
                        links::draw_links,
                        links::draw_trail,
                    )
                        .after(field_tick),
                    backdrop::apply_theme,
                    hud::update_hud.after(links::draw_links),
                ),
            );
    }
}
