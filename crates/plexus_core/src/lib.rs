pub mod config;
pub mod constants;
pub mod theme;
pub mod types;

pub use config::FieldConfig;
pub use constants::*;
pub use theme::{ThemeMode, ThemePalette};
pub use types::{Particle, PointerSample};
