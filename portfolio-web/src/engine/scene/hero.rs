use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use constants::hero_scene::{
    ACCENT_RGB, AMBIENT_BRIGHTNESS, CAMERA_DISTANCE, CAMERA_FOV_DEGREES, EMISSIVE_RGB,
    FILL_LIGHT_INTENSITY, FILL_LIGHT_POSITION, INNER_EMISSIVE_STRENGTH, INNER_METALLIC,
    INNER_RADIUS, INNER_ROUGHNESS, INNER_SEGMENTS, INNER_SPIN_PER_FRAME, KEY_LIGHT_INTENSITY,
    KEY_LIGHT_POSITION, OUTER_RADIUS, OUTER_SPIN_PER_FRAME, PARTICLE_COUNT, PARTICLE_OPACITY,
    PARTICLE_SIZE, PARTICLE_SPIN_PER_FRAME, PARTICLE_SPREAD,
};

use crate::engine::systems::spin::Spin;

/// Physical units per unit of the scene's relative light intensities.
const AMBIENT_BRIGHTNESS_SCALE: f32 = 500.0;
const POINT_LIGHT_LUMENS_SCALE: f32 = 1_000_000.0;
const POINT_LIGHT_RANGE: f32 = 40.0;

/// Additive recurrence constants of the R3 low-discrepancy sequence.
const R3_STEPS: [f32; 3] = [0.819_172_5, 0.671_043_6, 0.549_700_5];

#[derive(Component)]
pub struct HeroOuter;

#[derive(Component)]
pub struct HeroInner;

#[derive(Component)]
pub struct HeroParticles;

fn accent() -> Color {
    Color::srgb_u8(ACCENT_RGB[0], ACCENT_RGB[1], ACCENT_RGB[2])
}

pub fn setup_hero_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_outer_wireframe(&mut commands, &mut meshes, &mut materials);
    spawn_inner_sphere(&mut commands, &mut meshes, &mut materials);
    spawn_particles(&mut commands, &mut meshes, &mut materials);
    info!("Hero scene spawned with {PARTICLE_COUNT} particles");
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS * AMBIENT_BRIGHTNESS_SCALE,
        ..default()
    });

    let lights = [
        (accent(), KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION),
        (Color::WHITE, FILL_LIGHT_INTENSITY, FILL_LIGHT_POSITION),
    ];
    for (color, intensity, position) in lights {
        commands.spawn((
            PointLight {
                color,
                intensity: intensity * POINT_LIGHT_LUMENS_SCALE,
                range: POINT_LIGHT_RANGE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(position)),
        ));
    }
}

fn spawn_outer_wireframe(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: accent(),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(create_icosahedron_edges(OUTER_RADIUS))),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Spin::per_frame(Vec3::new(OUTER_SPIN_PER_FRAME, OUTER_SPIN_PER_FRAME, 0.0)),
        HeroOuter,
    ));
}

fn spawn_inner_sphere(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let emissive = Color::srgb_u8(EMISSIVE_RGB[0], EMISSIVE_RGB[1], EMISSIVE_RGB[2]).to_linear()
        * INNER_EMISSIVE_STRENGTH;
    let material = materials.add(StandardMaterial {
        base_color: accent(),
        metallic: INNER_METALLIC,
        perceptual_roughness: INNER_ROUGHNESS,
        emissive,
        ..default()
    });
    let mesh = Sphere::new(INNER_RADIUS)
        .mesh()
        .uv(INNER_SEGMENTS, INNER_SEGMENTS);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Spin::per_frame(Vec3::new(INNER_SPIN_PER_FRAME, INNER_SPIN_PER_FRAME, 0.0)),
        HeroInner,
    ));
}

/// Particles are small spheres under one rotating parent; WebGPU draws
/// point primitives one pixel wide regardless of size.
fn spawn_particles(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(PARTICLE_SIZE / 2.0).mesh().ico(1).unwrap_or_else(|err| {
        warn!("Particle mesh fallback: {err}");
        Sphere::new(PARTICLE_SIZE / 2.0).mesh().uv(8, 6)
    }));
    let material = materials.add(StandardMaterial {
        base_color: accent().with_alpha(PARTICLE_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Transform::IDENTITY,
            Visibility::default(),
            Spin::per_frame(Vec3::new(0.0, PARTICLE_SPIN_PER_FRAME, 0.0)),
            HeroParticles,
        ))
        .with_children(|parent| {
            for position in particle_positions(PARTICLE_COUNT, PARTICLE_SPREAD) {
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(position),
                ));
            }
        });
}

/// Icosahedron (detail 0) as a line list: 12 vertices, 30 edges.
pub fn create_icosahedron_edges(radius: f32) -> Mesh {
    let (vertices, edges) = icosahedron(radius);
    let indices: Vec<u32> = edges.iter().flat_map(|&(a, b)| [a, b]).collect();

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

fn icosahedron(radius: f32) -> (Vec<[f32; 3]>, Vec<(u32, u32)>) {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ];

    // Adjacent vertices of this construction are exactly 2 apart.
    let mut edges = Vec::with_capacity(30);
    for i in 0..raw.len() {
        for j in (i + 1)..raw.len() {
            if (raw[i].distance(raw[j]) - 2.0).abs() < 1e-4 {
                edges.push((i as u32, j as u32));
            }
        }
    }

    let vertices = raw
        .iter()
        .map(|v| (v.normalize() * radius).to_array())
        .collect();
    (vertices, edges)
}

/// Evenly scattered positions inside a cube of edge `spread` centred on the origin.
pub fn particle_positions(count: usize, spread: f32) -> Vec<Vec3> {
    (0..count)
        .map(|n| {
            let n = n as f32 + 1.0;
            let axis = |step: f32| ((0.5 + n * step).fract() - 0.5) * spread;
            Vec3::new(axis(R3_STEPS[0]), axis(R3_STEPS[1]), axis(R3_STEPS[2]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icosahedron_has_thirty_edges_on_the_sphere() {
        let (vertices, edges) = icosahedron(OUTER_RADIUS);
        assert_eq!(vertices.len(), 12);
        assert_eq!(edges.len(), 30);
        for v in &vertices {
            assert!((Vec3::from_array(*v).length() - OUTER_RADIUS).abs() < 1e-4);
        }
    }

    #[test]
    fn particles_stay_inside_the_cube() {
        let positions = particle_positions(PARTICLE_COUNT, PARTICLE_SPREAD);
        assert_eq!(positions.len(), 50);
        let half = PARTICLE_SPREAD / 2.0;
        assert!(positions.iter().all(|p| p.abs().max_element() <= half));
        assert_ne!(positions[0], positions[1]);
    }
}
