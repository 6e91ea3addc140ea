use plexus_core::{FieldConfig, Particle};
use rand::Rng;

/// Build a fresh particle population for a surface of the given size
///
/// Called at startup and on every resize. The previous population is
/// always discarded whole; carrying particles across a resize could leave
/// them stranded outside the new bounds.
pub fn seed_field(
    config: &FieldConfig,
    width: f32,
    height: f32,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let count = config.population(width, height);
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        particles.push(spawn_particle(config, width, height, rng));
    }
    particles
}

fn spawn_particle(config: &FieldConfig, width: f32, height: f32, rng: &mut impl Rng) -> Particle {
    let (radius_lo, radius_hi) = config.radius_range;
    let (repulsion_lo, repulsion_hi) = config.repulsion_range;

    // Drift anchor starts at the rendered position
    let x = rng.gen_range(0.0..width);
    let y = rng.gen_range(0.0..height);

    Particle {
        x,
        y,
        base_x: x,
        base_y: y,
        radius: rng.gen_range(radius_lo..radius_hi),
        repulsion: rng.gen_range(repulsion_lo..repulsion_hi),
        speed_x: rng.gen_range(-config.drift_speed..config.drift_speed),
        speed_y: rng.gen_range(-config.drift_speed..config.drift_speed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn population_is_area_over_divisor() {
        let config = FieldConfig::default();
        assert_eq!(seed_field(&config, 900.0, 900.0, &mut rng()).len(), 90);
        assert_eq!(seed_field(&config, 1920.0, 1080.0, &mut rng()).len(), 230);
        assert_eq!(seed_field(&config, 300.0, 200.0, &mut rng()).len(), 6);
    }

    #[test]
    fn degenerate_surface_seeds_nothing() {
        let config = FieldConfig::default();
        assert!(seed_field(&config, 0.0, 0.0, &mut rng()).is_empty());
        assert!(seed_field(&config, 0.0, 1080.0, &mut rng()).is_empty());
    }

    #[test]
    fn spawned_attributes_stay_in_range() {
        let config = FieldConfig::default();
        let particles = seed_field(&config, 1280.0, 720.0, &mut rng());
        assert!(!particles.is_empty());

        for p in &particles {
            assert!(p.x >= 0.0 && p.x < 1280.0);
            assert!(p.y >= 0.0 && p.y < 720.0);
            assert_eq!(p.x, p.base_x);
            assert_eq!(p.y, p.base_y);
            assert!(p.radius >= 0.5 && p.radius < 2.5);
            assert!(p.repulsion >= 1.0 && p.repulsion < 31.0);
            assert!(p.speed_x.abs() < 0.25);
            assert!(p.speed_y.abs() < 0.25);
        }
    }
}
