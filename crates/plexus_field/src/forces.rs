use plexus_core::{FieldConfig, Particle, PointerSample};

/// Displacement pushing a point away from the pointer
///
/// Returns `Some([dx, dy])` only when the point sits strictly inside the
/// repulsion radius at a nonzero distance; the magnitude is
/// `(radius - d) / radius * repulsion`. A zero distance leaves the push
/// direction undefined, so it yields `None` rather than dividing by zero.
pub fn pointer_displacement(
    x: f32,
    y: f32,
    pointer: PointerSample,
    pointer_radius: f32,
    repulsion: f32,
) -> Option<[f32; 2]> {
    let dx = pointer.x - x;
    let dy = pointer.y - y;
    let dist = (dx * dx + dy * dy).sqrt();

    if dist == 0.0 || dist >= pointer_radius {
        return None;
    }

    let force = (pointer_radius - dist) / pointer_radius;
    // Unit direction away from the pointer
    let ux = -dx / dist;
    let uy = -dy / dist;

    Some([ux * force * repulsion, uy * force * repulsion])
}

/// Advance one particle by one frame
///
/// Repulsion or relaxation first, then ambient drift of the base position
/// with soft boundary reflection. The base may overshoot the surface by up
/// to one frame's velocity before the bounce; that slack is intended.
pub fn step_particle(
    p: &mut Particle,
    pointer: Option<PointerSample>,
    config: &FieldConfig,
    width: f32,
    height: f32,
) {
    match pointer {
        Some(sample) => {
            let dx = sample.x - p.x;
            let dy = sample.y - p.y;
            let dist_sq = dx * dx + dy * dy;

            if dist_sq == 0.0 {
                // Pointer exactly on the particle: no defined push direction,
                // skip repulsion for this frame
            } else if let Some([px, py]) =
                pointer_displacement(p.x, p.y, sample, config.pointer_radius, p.repulsion)
            {
                p.x += px;
                p.y += py;
            } else {
                relax_toward_base(p, config.relaxation_factor);
            }
        }
        None => relax_toward_base(p, config.relaxation_factor),
    }

    // Ambient drift, independent of pointer interaction
    p.base_x += p.speed_x;
    p.base_y += p.speed_y;

    if p.base_x < 0.0 || p.base_x > width {
        p.speed_x = -p.speed_x;
    }
    if p.base_y < 0.0 || p.base_y > height {
        p.speed_y = -p.speed_y;
    }
}

/// Pull the rendered position a fixed fraction back toward the anchor,
/// each axis independently
fn relax_toward_base(p: &mut Particle, factor: f32) {
    p.x -= (p.x - p.base_x) * factor;
    p.y -= (p.y - p.base_y) * factor;
}
