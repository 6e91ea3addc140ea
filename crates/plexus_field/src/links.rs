use plexus_core::Particle;
use std::collections::HashMap;

/// A qualifying connective edge between two particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub ax: f32,
    pub ay: f32,
    pub bx: f32,
    pub by: f32,
    /// Distance falloff in (0, 1]: 1 at zero separation, 0 at the cutoff
    pub strength: f32,
}

/// Collect every link between particles closer than `max_dist`
///
/// Buckets particles into a uniform grid with cell size `max_dist`, so
/// each particle only scans its own cell and the forward half of its
/// neighborhood; every unordered pair is visited exactly once. Produces
/// the same link set as the full pair scan (see tests), without the n²
/// distance checks.
pub fn collect_links(particles: &[Particle], max_dist: f32) -> Vec<Link> {
    if max_dist <= 0.0 || particles.len() < 2 {
        return Vec::new();
    }

    let mut cells: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
    for (i, p) in particles.iter().enumerate() {
        cells.entry(cell_of(p.x, p.y, max_dist)).or_default().push(i);
    }

    // Forward half-neighborhood; the mirrored half is covered from the
    // neighboring cell's own iteration
    const FORWARD: [(i32, i32); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

    let mut links = Vec::new();
    for (&(cx, cy), members) in &cells {
        for (k, &i) in members.iter().enumerate() {
            for &j in &members[k + 1..] {
                try_link(&particles[i], &particles[j], max_dist, &mut links);
            }
        }
        for (dx, dy) in FORWARD {
            if let Some(neighbors) = cells.get(&(cx + dx, cy + dy)) {
                for &i in members {
                    for &j in neighbors {
                        try_link(&particles[i], &particles[j], max_dist, &mut links);
                    }
                }
            }
        }
    }
    links
}

fn cell_of(x: f32, y: f32, cell: f32) -> (i32, i32) {
    ((x / cell).floor() as i32, (y / cell).floor() as i32)
}

fn try_link(a: &Particle, b: &Particle, max_dist: f32, out: &mut Vec<Link>) {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < max_dist {
        out.push(Link {
            ax: a.x,
            ay: a.y,
            bx: b.x,
            by: b.y,
            strength: 1.0 - dist / max_dist,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plexus_core::FieldConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn dot(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            base_x: x,
            base_y: y,
            radius: 1.0,
            repulsion: 5.0,
            speed_x: 0.0,
            speed_y: 0.0,
        }
    }

    /// Reference implementation: unordered full pair scan
    fn collect_links_brute(particles: &[Particle], max_dist: f32) -> Vec<Link> {
        let mut links = Vec::new();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                try_link(&particles[i], &particles[j], max_dist, &mut links);
            }
        }
        links
    }

    /// Order-independent fingerprint of a link set
    fn fingerprint(links: &[Link]) -> Vec<[u32; 5]> {
        let mut keys: Vec<[u32; 5]> = links
            .iter()
            .map(|l| {
                let a = (l.ax.to_bits(), l.ay.to_bits());
                let b = (l.bx.to_bits(), l.by.to_bits());
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                [lo.0, lo.1, hi.0, hi.1, l.strength.to_bits()]
            })
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn cutoff_distance_yields_no_link() {
        let particles = [dot(0.0, 0.0), dot(120.0, 0.0)];
        assert!(collect_links(&particles, 120.0).is_empty());
    }

    #[test]
    fn coincident_particles_link_at_full_strength() {
        let particles = [dot(40.0, 40.0), dot(40.0, 40.0)];
        let links = collect_links(&particles, 120.0);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].strength, 1.0);
    }

    #[test]
    fn strength_falls_off_monotonically() {
        let mut last = f32::INFINITY;
        for separation in [10.0, 40.0, 70.0, 100.0, 119.0] {
            let particles = [dot(0.0, 0.0), dot(separation, 0.0)];
            let links = collect_links(&particles, 120.0);
            assert_eq!(links.len(), 1);
            assert!(links[0].strength < last);
            assert!(links[0].strength > 0.0);
            last = links[0].strength;
        }
    }

    #[test]
    fn strength_is_linear_in_distance() {
        let particles = [dot(0.0, 0.0), dot(0.0, 90.0)];
        let links = collect_links(&particles, 120.0);
        assert!((links[0].strength - 0.25).abs() < 1e-6);
    }

    #[test]
    fn grid_matches_full_pair_scan() {
        let config = FieldConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let particles = crate::particle::seed_field(&config, 1280.0, 720.0, &mut rng);

        let grid = collect_links(&particles, config.connection_distance);
        let brute = collect_links_brute(&particles, config.connection_distance);

        assert!(!brute.is_empty());
        assert_eq!(fingerprint(&grid), fingerprint(&brute));
    }

    #[test]
    fn grid_matches_brute_force_across_cell_boundaries() {
        // Pairs straddling cell edges in every forward direction
        let particles = [
            dot(119.0, 5.0),
            dot(121.0, 5.0),
            dot(5.0, 119.0),
            dot(5.0, 121.0),
            dot(119.0, 119.0),
            dot(121.0, 121.0),
            dot(121.0, 119.0),
            dot(119.0, 121.0),
        ];
        let grid = collect_links(&particles, 120.0);
        let brute = collect_links_brute(&particles, 120.0);
        assert_eq!(fingerprint(&grid), fingerprint(&brute));
    }
}
