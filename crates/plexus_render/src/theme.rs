use bevy::prelude::*;
use plexus_core::{ThemeMode, ThemePalette};

/// Active theme, owned by the render layer
///
/// The simulator never sees this; a theme switch changes which color
/// constants the next frame draws with and nothing else.
#[derive(Resource, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

impl ThemeState {
    pub fn palette(&self) -> ThemePalette {
        self.mode.palette()
    }
}

/// Palette components to a bevy color
pub fn palette_color(c: [f32; 4]) -> Color {
    Color::srgba(c[0], c[1], c[2], c[3])
}
