pub mod forces;
pub mod links;
pub mod particle;

pub use forces::{pointer_displacement, step_particle};
pub use links::{collect_links, Link};
pub use particle::seed_field;
