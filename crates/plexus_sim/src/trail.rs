use bevy::prelude::*;
use plexus_core::constants::TRAIL_CAPACITY;
use plexus_core::PointerSample;

/// Recent pointer samples, oldest first
///
/// Fixed capacity; pushing past it drops the oldest sample. Disabled by
/// default, matching how the effect originally shipped.
#[derive(Resource)]
pub struct TrailState {
    pub enabled: bool,
    pub points: Vec<PointerSample>,
    capacity: usize,
}

impl Default for TrailState {
    fn default() -> Self {
        Self {
            enabled: false,
            points: Vec::with_capacity(TRAIL_CAPACITY),
            capacity: TRAIL_CAPACITY,
        }
    }
}

impl TrailState {
    pub fn push(&mut self, sample: PointerSample) {
        self.points.push(sample);
        if self.points.len() > self.capacity {
            self.points.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_bounds_the_queue() {
        let mut trail = TrailState::default();
        for i in 0..50 {
            trail.push(PointerSample {
                x: i as f32,
                y: 0.0,
            });
        }
        assert_eq!(trail.points.len(), trail.capacity());
        // Oldest samples were dropped first
        assert_eq!(trail.points[0].x, 30.0);
        assert_eq!(trail.points.last().unwrap().x, 49.0);
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut trail = TrailState::default();
        trail.push(PointerSample { x: 1.0, y: 2.0 });
        trail.clear();
        assert!(trail.points.is_empty());
    }
}
