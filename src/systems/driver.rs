use bevy::prelude::*;

use crate::components::{GliderCamera, InputState, SceneryTag};
use crate::resources::{BevySurface, ConfigSource, FrameDriver};

pub fn log_config_source_system(source: Res<ConfigSource>) {
    info!("Configuration loaded from {}", *source);
}

pub fn start_driver_system(mut driver: ResMut<FrameDriver<BevySurface>>) {
    driver.start();
}

/// Run condition for the fixed-tick driver system.
pub fn driver_running(driver: Res<FrameDriver<BevySurface>>) -> bool {
    driver.is_running()
}

/// One frame driver iteration per fixed tick.
pub fn frame_driver_system(mut driver: ResMut<FrameDriver<BevySurface>>, input: Res<InputState>) {
    driver.run_iteration(&input);
}

/// Copies the most recently rendered surface frame onto the camera and
/// scenery transforms.
pub fn present_frame_system(
    mut driver: ResMut<FrameDriver<BevySurface>>,
    mut cameras: Query<&mut Transform, (With<GliderCamera>, Without<SceneryTag>)>,
    mut scenery: Query<(&SceneryTag, &mut Transform), Without<GliderCamera>>,
) {
    let surface = driver.surface_mut();
    if !surface.take_pending() {
        return;
    }

    if let (Some(camera), Ok(mut transform)) = (surface.camera(), cameras.get_single_mut()) {
        *transform = camera.to_transform();
    }

    let entities = surface.entities();
    for (tag, mut transform) in scenery.iter_mut() {
        match entities.get(tag.id) {
            Some(entity) => transform.translation = entity.translation(),
            None => warn!("No transform buffered for scenery id {}", tag.id),
        }
    }
}
