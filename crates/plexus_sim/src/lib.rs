pub mod field;
pub mod pipeline;
pub mod trail;

pub use field::FieldState;
pub use pipeline::SimulationPlugin;
pub use trail::TrailState;
