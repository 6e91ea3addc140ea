use bevy::prelude::*;
use plexus_core::{FieldConfig, Particle, PointerSample};
use plexus_field::links::Link;
use plexus_field::{collect_links, seed_field, step_particle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Live particle-field state, tracked as a Bevy Resource
///
/// All mutation goes through explicit methods: external events call the
/// `handle_*` methods, the frame driver calls `tick()`. The pointer record
/// and the running flag are plain last-write-wins cells; event intake and
/// the tick never run concurrently under Bevy's schedule.
#[derive(Resource)]
pub struct FieldState {
    /// Surface size in px; zero until the first resize arrives
    pub width: f32,
    pub height: f32,
    /// Current population; fully rebuilt on every resize, never patched
    pub particles: Vec<Particle>,
    /// Latest pointer sample, absent when the pointer is untracked
    pub pointer: Option<PointerSample>,
    /// Frame gate; `tick()` is a no-op while false
    pub running: bool,
    /// Frames advanced since start
    pub frame: u64,
    /// Incremented on every reseed; the render layer rebuilds its
    /// entities when this moves
    pub generation: u32,
    pub config: FieldConfig,
    rng: ChaCha8Rng,
}

impl FieldState {
    /// State with an empty surface, seeded from the configured RNG seed.
    /// The first resize builds the population.
    pub fn new(config: FieldConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            pointer: None,
            running: true,
            frame: 0,
            generation: 0,
            config,
            rng,
        }
    }

    /// Like `new`, but seeded from OS entropy for visual runs
    pub fn from_entropy(config: FieldConfig) -> Self {
        let mut state = Self::new(config);
        state.rng = ChaCha8Rng::from_entropy();
        state
    }

    /// Resize the surface and rebuild the whole population
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.reseed();
    }

    /// Re-roll the population at the current surface size
    pub fn reseed(&mut self) {
        self.particles = seed_field(&self.config, self.width, self.height, &mut self.rng);
        self.generation = self.generation.wrapping_add(1);
        info!(
            "Seeded {} particles over {:.0}×{:.0}",
            self.particles.len(),
            self.width,
            self.height
        );
    }

    /// Record the latest pointer position over the surface
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some(PointerSample { x, y });
    }

    /// Clear the pointer record (pointer left the surface)
    pub fn handle_pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Advance every particle by one frame
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.frame = self.frame.wrapping_add(1);

        let pointer = self.pointer;
        for p in &mut self.particles {
            step_particle(p, pointer, &self.config, self.width, self.height);
        }
    }

    /// Halt the frame loop; `tick()` becomes a no-op until `resume()`
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Collect this frame's connective edges
    pub fn links(&self) -> Vec<Link> {
        collect_links(&self.particles, self.config.connection_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plexus_core::ThemeMode;

    fn field_at(width: f32, height: f32) -> FieldState {
        let mut field = FieldState::new(FieldConfig::default());
        field.handle_resize(width, height);
        field
    }

    #[test]
    fn resize_rebuilds_exact_population() {
        let mut field = field_at(900.0, 900.0);
        assert_eq!(field.particles.len(), 90);

        field.handle_resize(1920.0, 1080.0);
        assert_eq!(field.particles.len(), 230);

        field.handle_resize(0.0, 0.0);
        assert!(field.particles.is_empty());
    }

    #[test]
    fn every_resize_bumps_the_generation() {
        let mut field = field_at(640.0, 480.0);
        let before = field.generation;
        field.handle_resize(640.0, 480.0);
        assert_eq!(field.generation, before.wrapping_add(1));
    }

    #[test]
    fn reseed_keeps_bases_inside_the_surface() {
        for (w, h) in [(320.0, 240.0), (900.0, 900.0), (2560.0, 1440.0)] {
            let field = field_at(w, h);
            for p in &field.particles {
                assert!(p.base_x >= 0.0 && p.base_x <= w);
                assert!(p.base_y >= 0.0 && p.base_y <= h);
            }
        }
    }

    #[test]
    fn tick_is_a_noop_while_stopped() {
        let mut field = field_at(900.0, 900.0);
        field.handle_pointer_move(450.0, 450.0);
        field.stop();

        let before = field.particles.clone();
        let frame = field.frame;
        for _ in 0..10 {
            field.tick();
        }
        assert_eq!(field.particles, before);
        assert_eq!(field.frame, frame);

        field.resume();
        field.tick();
        assert_eq!(field.frame, frame + 1);
    }

    #[test]
    fn tick_mutates_only_positional_state() {
        let mut field = field_at(1280.0, 720.0);
        let fixed: Vec<(f32, f32)> = field
            .particles
            .iter()
            .map(|p| (p.radius, p.repulsion))
            .collect();

        field.handle_pointer_move(640.0, 360.0);
        for _ in 0..120 {
            field.tick();
        }
        for (p, (radius, repulsion)) in field.particles.iter().zip(&fixed) {
            assert_eq!(p.radius, *radius);
            assert_eq!(p.repulsion, *repulsion);
        }
    }

    #[test]
    fn pointer_record_is_last_write_wins() {
        let mut field = field_at(640.0, 480.0);
        field.handle_pointer_move(10.0, 20.0);
        field.handle_pointer_move(30.0, 40.0);
        assert_eq!(field.pointer, Some(PointerSample { x: 30.0, y: 40.0 }));

        field.handle_pointer_left();
        assert_eq!(field.pointer, None);
    }

    #[test]
    fn theme_choice_never_reaches_particle_state() {
        // The simulator takes no theme input; palettes are pure color
        // tables consumed by the render layer
        let mut field = field_at(900.0, 900.0);
        for _ in 0..30 {
            field.tick();
        }
        let before = field.particles.clone();

        let dark = ThemeMode::Dark.palette();
        let light = ThemeMode::Light.palette();
        assert_ne!(dark.particle, light.particle);

        assert_eq!(field.particles, before);
    }
}
