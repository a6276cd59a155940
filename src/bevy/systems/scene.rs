//! Scene setup systems
//!
//! The stage (render target, camera, lights) is built once at startup. The
//! pokeball and starfield are spawned each time the splash screen is
//! entered and tagged with `SplashEntity` so teardown can remove them.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::{
    asset::{Assets, RenderAssetUsages},
    camera::RenderTarget,
    core_pipeline::tonemapping::Tonemapping,
    image::Image,
    math::{
        primitives::{Cylinder, Sphere, Torus},
        Quat, Vec3,
    },
    mesh::Indices,
    pbr::{MeshMaterial3d, StandardMaterial},
    prelude::*,
    render::{
        render_resource::{Extent3d, PrimitiveTopology, TextureFormat, TextureUsages},
        renderer::RenderDevice,
    },
};
use tracing::{debug, info};

use crate::bevy::components::{
    CameraController, CenterButtonLens, FloatRig, OffscreenCamera, PokeballPart, SplashEntity,
    Starfield,
};
use crate::bevy::messages::EruptionStarted;
use crate::bevy::plugins::image_copy::ImageCopier;
use crate::bevy::resources::OrbitCameraState;
use crate::bevy::systems::camera::orbit_transform;
use crate::config::splash::{BALL_RADIUS, BUTTON_GLOW};
use crate::config::{stars, RENDER_HEIGHT, RENDER_WIDTH};
use crate::splash::starfield::{star_positions, star_scale};

/// Create the offscreen render target, camera, and lights
pub fn setup_stage(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    render_device: Res<RenderDevice>,
    orbit_state: Res<OrbitCameraState>,
) {
    let size = Extent3d {
        width: RENDER_WIDTH,
        height: RENDER_HEIGHT,
        depth_or_array_layers: 1,
    };

    // Create render target texture
    let mut render_target_image =
        Image::new_target_texture(size.width, size.height, TextureFormat::bevy_default());
    render_target_image.texture_descriptor.usage |= TextureUsages::COPY_SRC;
    let render_target_image_handle = images.add(render_target_image);

    // Spawn image copier for GPU-to-CPU transfer
    commands.spawn(ImageCopier::new(
        render_target_image_handle.clone(),
        size,
        &render_device,
    ));

    commands.spawn((
        Camera3d::default(),
        Camera {
            target: RenderTarget::Image(render_target_image_handle.into()),
            clear_color: ClearColorConfig::Custom(Color::srgb(0.04, 0.04, 0.1)),
            ..default()
        },
        Tonemapping::None,
        orbit_transform(&orbit_state),
        OffscreenCamera,
        CameraController,
    ));

    // Key light
    commands.spawn((
        PointLight {
            intensity: 3_000_000.0,
            range: 40.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));

    // Narrow rim spot
    commands.spawn((
        SpotLight {
            intensity: 2_000_000.0,
            range: 40.0,
            outer_angle: 0.15,
            inner_angle: 0.0,
            ..default()
        },
        Transform::from_xyz(-10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Soft fill standing in for the environment map
    commands.spawn((
        DirectionalLight {
            illuminance: 2500.0,
            color: Color::srgb(0.85, 0.9, 1.0),
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.4, -0.6, 0.0)),
    ));

    info!(width = RENDER_WIDTH, height = RENDER_HEIGHT, "Stage ready");
}

/// Spawn the pokeball and the starfield for a new splash
pub fn spawn_splash_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let shell = |color: Color| StandardMaterial {
        base_color: color,
        metallic: 0.8,
        perceptual_roughness: 0.3,
        ..default()
    };
    let black = materials.add(StandardMaterial {
        base_color: Color::BLACK,
        perceptual_roughness: 0.5,
        ..default()
    });

    let top = (
        Mesh3d(meshes.add(hemisphere(BALL_RADIUS, 32, 16, true))),
        MeshMaterial3d(materials.add(shell(Color::srgb(1.0, 0.0, 0.0)))),
    );
    let bottom = (
        Mesh3d(meshes.add(hemisphere(BALL_RADIUS, 32, 16, false))),
        MeshMaterial3d(materials.add(shell(Color::WHITE))),
    );
    let ring = (
        Mesh3d(meshes.add(Torus::new(BALL_RADIUS - 0.07, BALL_RADIUS + 0.09))),
        MeshMaterial3d(black.clone()),
    );
    let button = (
        Mesh3d(meshes.add(Cylinder::new(0.5, 0.2))),
        MeshMaterial3d(black),
    );
    let lens = (
        Mesh3d(meshes.add(Cylinder::new(0.3, 0.2))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            emissive: LinearRgba::BLACK,
            ..default()
        })),
    );
    // Cylinders stand along Y, the button faces the camera along Z
    let facing = Quat::from_rotation_x(FRAC_PI_2);

    commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            FloatRig,
            SplashEntity,
        ))
        .with_children(|rig| {
            rig.spawn((Transform::default(), Visibility::default(), PokeballPart::Root))
                .with_children(|ball| {
                    ball.spawn((top, Transform::default(), PokeballPart::TopHalf));
                    ball.spawn((bottom, Transform::default(), PokeballPart::BottomHalf));
                    ball.spawn((ring, Transform::default()));
                    ball.spawn((
                        button,
                        Transform::from_xyz(0.0, 0.0, BALL_RADIUS).with_rotation(facing),
                    ));
                    ball.spawn((
                        lens,
                        Transform::from_xyz(0.0, 0.0, BALL_RADIUS + 0.1).with_rotation(facing),
                        CenterButtonLens,
                    ));
                });
        });

    let star_mesh = meshes.add(Sphere::new(stars::SIZE).mesh().uv(6, 4));
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::rgb(4.0, 4.0, 4.0),
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            Starfield,
            SplashEntity,
        ))
        .with_children(|sky| {
            for (i, position) in star_positions(stars::COUNT, stars::RADIUS, stars::DEPTH)
                .into_iter()
                .enumerate()
            {
                sky.spawn((
                    Mesh3d(star_mesh.clone()),
                    MeshMaterial3d(star_material.clone()),
                    Transform::from_translation(position).with_scale(Vec3::splat(star_scale(i))),
                ));
            }
        });

    debug!(stars = stars::COUNT, "Splash scene spawned");
}

/// Resume frame readback while the splash is on screen
pub fn resume_readback(copiers: Query<&ImageCopier>) {
    for copier in &copiers {
        copier.set_enabled(true);
    }
}

/// Nothing drains frames off the splash, so stop copying them
pub fn pause_readback(copiers: Query<&ImageCopier>) {
    for copier in &copiers {
        copier.set_enabled(false);
    }
}

/// Light up the center button when the eruption begins
pub fn ignite_center_button(
    mut eruptions: MessageReader<EruptionStarted>,
    lenses: Query<&MeshMaterial3d<StandardMaterial>, With<CenterButtonLens>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if eruptions.read().count() == 0 {
        return;
    }
    for lens in lenses.iter() {
        if let Some(material) = materials.get_mut(&lens.0) {
            material.emissive = LinearRgba::WHITE * BUTTON_GLOW;
        }
    }
}

/// Closed half sphere: a UV dome plus a flat cap on the equator
///
/// `upper` selects the +Y half, otherwise the dome points down.
fn hemisphere(radius: f32, sectors: u32, stacks: u32, upper: bool) -> Mesh {
    let sign = if upper { 1.0 } else { -1.0 };
    let ring_len = sectors + 1;

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    // Dome rings from the pole (stack 0) down to the equator (stack `stacks`)
    for stack in 0..=stacks {
        let polar = FRAC_PI_2 * stack as f32 / stacks as f32;
        let (ring_radius, height) = polar.sin_cos();
        for sector in 0..=sectors {
            let azimuth = TAU * sector as f32 / sectors as f32;
            let (sin_a, cos_a) = azimuth.sin_cos();
            let normal = [ring_radius * cos_a, sign * height, ring_radius * sin_a];
            positions.push([normal[0] * radius, normal[1] * radius, normal[2] * radius]);
            normals.push(normal);
            uvs.push([
                sector as f32 / sectors as f32,
                stack as f32 / stacks as f32,
            ]);
        }
    }

    for stack in 0..stacks {
        for sector in 0..sectors {
            let a = stack * ring_len + sector;
            let b = a + ring_len;
            // Wind outward for both halves
            if upper {
                indices.extend_from_slice(&[a, a + 1, b, b, a + 1, b + 1]);
            } else {
                indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
            }
        }
    }

    // Cap on the cut plane, facing into the ball's center
    let center = positions.len() as u32;
    positions.push([0.0, 0.0, 0.0]);
    normals.push([0.0, -sign, 0.0]);
    uvs.push([0.5, 0.5]);
    for sector in 0..=sectors {
        let azimuth = TAU * sector as f32 / sectors as f32;
        let (sin_a, cos_a) = azimuth.sin_cos();
        positions.push([cos_a * radius, 0.0, sin_a * radius]);
        normals.push([0.0, -sign, 0.0]);
        uvs.push([0.5 + cos_a * 0.5, 0.5 + sin_a * 0.5]);
    }
    for sector in 0..sectors {
        let a = center + 1 + sector;
        if upper {
            indices.extend_from_slice(&[center, a, a + 1]);
        } else {
            indices.extend_from_slice(&[center, a + 1, a]);
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_stays_on_its_side() {
        for upper in [true, false] {
            let mesh = hemisphere(2.0, 8, 4, upper);
            let positions = mesh
                .attribute(Mesh::ATTRIBUTE_POSITION)
                .and_then(|values| values.as_float3())
                .unwrap();
            // Dome, cap center, cap ring
            assert_eq!(positions.len(), 9 * 5 + 1 + 9);
            for p in positions {
                assert!(if upper { p[1] >= -1e-5 } else { p[1] <= 1e-5 });
                assert!(Vec3::from(*p).length() <= 2.0 + 1e-4);
            }
            assert_eq!(mesh.indices().map(|i| i.len()), Some(8 * 4 * 6 + 8 * 3));
        }
    }
}
