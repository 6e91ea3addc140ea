use serde::{Deserialize, Serialize};

/// Active color scheme
/// Owned and toggled by the render layer; the simulator never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// Fixed color constants for this theme
    pub fn palette(&self) -> ThemePalette {
        match self {
            Self::Dark => ThemePalette {
                backdrop: [0.04, 0.04, 0.06, 1.0], // near-black blue
                particle: [0.0, 0.96, 1.0, 0.55],  // translucent cyan
                link: [0.0, 0.96, 1.0, 1.0],       // cyan, alpha from strength
                link_opacity: 0.25,
            },
            Self::Light => ThemePalette {
                backdrop: [0.95, 0.96, 0.98, 1.0], // paper white
                particle: [0.08, 0.12, 0.2, 0.5],  // translucent slate
                link: [0.08, 0.12, 0.2, 1.0],      // slate, alpha from strength
                link_opacity: 0.15,
            },
        }
    }
}

/// Color constants for one theme, as srgba components [r, g, b, a]
/// Link alpha at render time is `strength * link_opacity`, where strength
/// is the distance falloff computed by the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub backdrop: [f32; 4],
    pub particle: [f32; 4],
    pub link: [f32; 4],
    pub link_opacity: f32,
}
