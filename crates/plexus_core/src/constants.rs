// Field tuning constants (surface-pixel units)
// The divisor/radius/distance trio defines the look of the network:
// one particle per 9000 px², repulsion within 150 px of the pointer,
// links between particles closer than 120 px.

/// Surface area (px²) per particle
pub const DENSITY_DIVISOR: f32 = 9000.0;

/// Pointer repulsion radius (px)
pub const POINTER_RADIUS: f32 = 150.0;

/// Maximum link distance between two particles (px)
pub const CONNECTION_DISTANCE: f32 = 120.0;

/// Fraction of the offset to base recovered per frame when undisturbed
pub const RELAXATION_FACTOR: f32 = 0.1;

/// Disc radius range at creation (px)
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_MAX: f32 = 2.5;

/// Per-particle repulsion multiplier range at creation
pub const REPULSION_MIN: f32 = 1.0;
pub const REPULSION_MAX: f32 = 31.0;

/// Ambient drift speed bound per axis (px/frame)
pub const DRIFT_SPEED: f32 = 0.25;

/// Pointer-trail sample capacity
pub const TRAIL_CAPACITY: usize = 20;

/// Default RNG seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;
