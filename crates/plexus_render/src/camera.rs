use bevy::prelude::*;

/// Marker for the field camera
#[derive(Component)]
pub struct FieldCamera;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, FieldCamera));
}

/// Map surface coordinates (origin top-left, y down) to world space
/// (origin center, y up). The simulator and pointer events both live in
/// surface space.
pub fn surface_to_world(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(x - width * 0.5, height * 0.5 - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_center_maps_to_origin() {
        assert_eq!(
            surface_to_world(640.0, 360.0, 1280.0, 720.0),
            Vec2::ZERO
        );
    }

    #[test]
    fn surface_corners_map_with_y_flipped() {
        assert_eq!(
            surface_to_world(0.0, 0.0, 1280.0, 720.0),
            Vec2::new(-640.0, 360.0)
        );
        assert_eq!(
            surface_to_world(1280.0, 720.0, 1280.0, 720.0),
            Vec2::new(640.0, -360.0)
        );
    }
}
