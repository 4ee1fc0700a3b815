use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use crate::components::{EntityKind, GliderCamera, SceneryTag};
use crate::plugins::StartupStage;
use crate::resources::{BevySurface, FrameDriver};
use crate::utils::{
    BUILDING_COLOR, BUILDING_SIZE, BUSH_COLOR, BUSH_FLATTEN, BUSH_RADIUS, GRASS_COLOR,
    GROUND_SIZE, RUNWAY_COLOR, RUNWAY_LENGTH, RUNWAY_WIDTH, SKY_COLOR,
};

/// Authors the visible world: camera, lights, ground and one mesh per
/// pooled scenery entity. Requires `FlightPlugin` and the bevy renderer.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(srgb(SKY_COLOR)))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 600.0,
            })
            .add_systems(
                Startup,
                (spawn_environment, spawn_scenery).in_set(StartupStage::BuildScenery),
            )
            .add_systems(Startup, spawn_camera.in_set(StartupStage::BuildCameras));
    }
}

fn srgb([r, g, b]: [u8; 3]) -> Color {
    Color::srgb_u8(r, g, b)
}

fn spawn_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        DirectionalLight {
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: srgb(GRASS_COLOR),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::IDENTITY,
        Name::new("Ground"),
    ));
}

fn spawn_scenery(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    driver: Res<FrameDriver<BevySurface>>,
) {
    let runway_mesh = meshes.add(Plane3d::default().mesh().size(RUNWAY_WIDTH, RUNWAY_LENGTH));
    let bush_mesh = meshes.add(Sphere::new(BUSH_RADIUS).mesh().uv(8, 6));
    let building_mesh = meshes.add(Cuboid::new(
        BUILDING_SIZE[0],
        BUILDING_SIZE[1],
        BUILDING_SIZE[2],
    ));

    let runway_material = materials.add(StandardMaterial {
        base_color: srgb(RUNWAY_COLOR),
        perceptual_roughness: 0.8,
        ..default()
    });
    let bush_material = materials.add(StandardMaterial {
        base_color: srgb(BUSH_COLOR),
        perceptual_roughness: 1.0,
        ..default()
    });
    let building_material = materials.add(StandardMaterial {
        base_color: srgb(BUILDING_COLOR),
        ..default()
    });

    let scenery = &driver.state().scenery;
    for entity in scenery {
        let translation = entity.transform().translation();
        let (mesh, material, scale) = match entity.kind {
            EntityKind::Runway => (runway_mesh.clone(), runway_material.clone(), Vec3::ONE),
            EntityKind::Bush => (
                bush_mesh.clone(),
                bush_material.clone(),
                Vec3::new(1.0, BUSH_FLATTEN, 1.0),
            ),
            EntityKind::Building => (
                building_mesh.clone(),
                building_material.clone(),
                Vec3::ONE,
            ),
        };

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(translation).with_scale(scale),
            SceneryTag {
                id: entity.id,
                kind: entity.kind,
            },
        ));
    }

    info!("Spawned {} scenery entities", scenery.len());
}

fn spawn_camera(mut commands: Commands, driver: Res<FrameDriver<BevySurface>>) {
    let camera = &driver.config().camera;
    let transform = driver.state().camera_transform(camera).to_transform();

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.znear,
            far: camera.zfar,
            ..default()
        }),
        transform,
        DistanceFog {
            color: srgb(SKY_COLOR),
            falloff: FogFalloff::Linear {
                start: camera.fog_start,
                end: camera.fog_end,
            },
            ..default()
        },
        GliderCamera,
        Name::new("Cockpit Camera"),
    ));
}
