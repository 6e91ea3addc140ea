use bevy::prelude::*;
use plexus_core::FieldConfig;
use plexus_render::theme::{palette_color, ThemeState};
use plexus_render::PlexusRenderPlugin;
use plexus_sim::{FieldState, SimulationPlugin, TrailState};

fn main() {
    let config = FieldConfig::default();

    // The theme flag is the only persisted state; a missing file just
    // means first run
    let theme = plexus_storage::load_preferences(&plexus_storage::default_path())
        .map(|prefs| prefs.theme)
        .unwrap_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Plexus — particle network".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(palette_color(theme.palette().backdrop)))
        .insert_resource(FieldState::from_entropy(config))
        .insert_resource(TrailState::default())
        .insert_resource(ThemeState { mode: theme })
        .add_plugins(SimulationPlugin)
        .add_plugins(PlexusRenderPlugin)
        .run();
}
