use bevy::prelude::*;

use super::particles::DotAssets;
use super::theme::{palette_color, ThemeState};

/// Apply the active palette to the backdrop and the shared disc material
///
/// Runs only when the theme resource changed (which includes its initial
/// insertion, so the first frame is already themed).
pub fn apply_theme(
    theme: Res<ThemeState>,
    mut clear_color: ResMut<ClearColor>,
    assets: Option<Res<DotAssets>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !theme.is_changed() {
        return;
    }

    let palette = theme.palette();
    clear_color.0 = palette_color(palette.backdrop);

    if let Some(assets) = assets {
        if let Some(material) = materials.get_mut(&assets.material) {
            material.color = palette_color(palette.particle);
        }
    }
}
