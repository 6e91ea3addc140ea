pub mod backdrop;
pub mod camera;
pub mod controls;
pub mod hud;
pub mod input;
pub mod links;
pub mod particles;
pub mod plugin;
pub mod theme;

pub use plugin::PlexusRenderPlugin;
pub use theme::ThemeState;
