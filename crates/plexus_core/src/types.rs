/// A single field particle
/// Plain data; identity is its array slot. Radius and repulsion are fixed
/// at creation, only the positional fields mutate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Rendered position
    pub x: f32,
    pub y: f32,
    /// Drift anchor; the rendered position relaxes back toward it
    pub base_x: f32,
    pub base_y: f32,
    /// Disc radius (px), fixed at creation
    pub radius: f32,
    /// Pointer-repulsion multiplier, fixed at creation
    pub repulsion: f32,
    /// Ambient drift velocity applied to the base position (px/frame)
    pub speed_x: f32,
    pub speed_y: f32,
}

impl Particle {
    /// Distance from the rendered position to the drift anchor
    pub fn offset_from_base(&self) -> f32 {
        let dx = self.x - self.base_x;
        let dy = self.y - self.base_y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Latest pointer position over the surface
/// Kept as `Option<PointerSample>` by the simulator: absent when the
/// pointer left the surface or has never moved. No history beyond the
/// latest sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}
