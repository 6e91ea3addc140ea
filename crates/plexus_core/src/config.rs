use serde::{Deserialize, Serialize};

use crate::constants;

/// Field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Surface area (px²) per particle; population = floor(area / divisor)
    pub density_divisor: f32,
    /// Pointer repulsion radius (px)
    pub pointer_radius: f32,
    /// Maximum link distance (px)
    pub connection_distance: f32,
    /// Fraction of the offset to base recovered per undisturbed frame
    pub relaxation_factor: f32,
    /// Disc radius range at creation (px)
    pub radius_range: (f32, f32),
    /// Per-particle repulsion multiplier range at creation
    pub repulsion_range: (f32, f32),
    /// Ambient drift speed bound per axis (px/frame)
    pub drift_speed: f32,
    /// Random seed for deterministic seeding
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density_divisor: constants::DENSITY_DIVISOR,
            pointer_radius: constants::POINTER_RADIUS,
            connection_distance: constants::CONNECTION_DISTANCE,
            relaxation_factor: constants::RELAXATION_FACTOR,
            radius_range: (constants::RADIUS_MIN, constants::RADIUS_MAX),
            repulsion_range: (constants::REPULSION_MIN, constants::REPULSION_MAX),
            drift_speed: constants::DRIFT_SPEED,
            seed: constants::DEFAULT_SEED,
        }
    }
}

impl FieldConfig {
    /// Particle population for a surface of the given size
    pub fn population(&self, width: f32, height: f32) -> usize {
        (width * height / self.density_divisor).floor().max(0.0) as usize
    }
}
