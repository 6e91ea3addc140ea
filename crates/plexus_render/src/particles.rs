use bevy::prelude::*;
use plexus_sim::FieldState;

use super::camera::surface_to_world;
use super::theme::{palette_color, ThemeState};

/// Marker for one particle disc entity
#[derive(Component)]
pub struct ParticleDot {
    pub index: usize,
}

/// Shared handles for disc rendering
///
/// One mesh and one material for the whole population: a theme switch
/// recolors every disc by editing the single material.
#[derive(Resource)]
pub struct DotAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
    /// Reseed generation the current disc entities were built for
    pub built_generation: u32,
}

pub fn setup_dot_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    theme: Res<ThemeState>,
) {
    // Unit circle, scaled per entity to the particle's radius
    let mesh = meshes.add(Circle::new(1.0));
    let material = materials.add(ColorMaterial::from(palette_color(theme.palette().particle)));

    commands.insert_resource(DotAssets {
        mesh,
        material,
        // Sentinel so the first sync always builds the entities
        built_generation: u32::MAX,
    });
}

/// Keep one disc entity per particle, positions synced every frame
///
/// A reseed replaces the population wholesale, so on a generation change
/// every disc is despawned and respawned rather than patched.
pub fn sync_particle_visuals(
    mut commands: Commands,
    field: Res<FieldState>,
    mut assets: ResMut<DotAssets>,
    mut query: Query<(Entity, &mut Transform, &ParticleDot)>,
) {
    if assets.built_generation != field.generation {
        for (entity, _, _) in &query {
            commands.entity(entity).despawn();
        }
        for (index, p) in field.particles.iter().enumerate() {
            let pos = surface_to_world(p.x, p.y, field.width, field.height);
            commands.spawn((
                Mesh2d(assets.mesh.clone()),
                MeshMaterial2d(assets.material.clone()),
                Transform::from_translation(pos.extend(1.0)).with_scale(Vec3::splat(p.radius)),
                ParticleDot { index },
            ));
        }
        assets.built_generation = field.generation;
        return;
    }

    for (_, mut transform, dot) in &mut query {
        if dot.index >= field.particles.len() {
            continue;
        }
        let p = &field.particles[dot.index];
        let pos = surface_to_world(p.x, p.y, field.width, field.height);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}
