use bevy::prelude::*;

use crate::field::FieldState;

/// Bevy plugin for the per-frame field tick
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, field_tick);
    }
}

/// Main field tick — advances every particle one frame
///
/// Public so the render layer can order its event intake before it and
/// its drawing after it.
pub fn field_tick(mut field: ResMut<FieldState>) {
    field.tick();
}
