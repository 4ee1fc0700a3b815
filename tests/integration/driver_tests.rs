use approx::assert_relative_eq;
use bevy::prelude::*;
use glider::{
    components::{EntityKind, InputState},
    resources::{BevySurface, ConfigSource, DriverPhase, FrameDriver, GliderConfig},
    utils::GliderError,
};
use pretty_assertions::assert_eq;

use crate::common::TestAppBuilder;

#[test]
fn test_driver_starts_with_app() {
    let app = TestAppBuilder::new().build();
    assert_eq!(app.driver().phase(), DriverPhase::Running);
}

#[test]
fn test_config_source_available_at_startup() {
    let app = TestAppBuilder::new().build();
    assert_eq!(
        app.app.world().resource::<ConfigSource>(),
        &ConfigSource::Defaults
    );

    let path = std::path::PathBuf::from("flight.yaml");
    let app = TestAppBuilder::new()
        .with_source(ConfigSource::File(path.clone()))
        .build();
    assert_eq!(
        app.app.world().resource::<ConfigSource>(),
        &ConfigSource::File(path)
    );
}

#[test]
fn test_headless_driver_without_host() {
    let mut driver = FrameDriver::builder()
        .config(GliderConfig::default())
        .surface(BevySurface::new())
        .build()
        .unwrap();

    let input = InputState::new();
    assert!(!driver.run_iteration(&input));

    driver.start();
    for _ in 0..5 {
        assert!(driver.run_iteration(&input));
    }

    assert_eq!(driver.surface().frames_rendered(), 5);
    let runway = driver.surface().entities()[0];
    assert_eq!(runway.position_z, -200.0 + 5.0 * 1.25);
}

#[test]
fn test_missing_surface_aborts_startup() {
    let result = FrameDriver::<BevySurface>::builder().build();
    assert!(matches!(result, Err(GliderError::MissingRenderSurface)));
}

#[test]
fn test_present_writes_camera_and_scenery() {
    let mut app = TestAppBuilder::new().with_present_targets().build();
    app.input_mut().press(KeyCode::ArrowRight);
    app.run_ticks(10);
    // Present runs in Update of the same frame as the last tick
    let camera = app.camera_transform().expect("camera spawned");
    let control = app.driver().state().control;

    assert_relative_eq!(control.roll_angle, -10.0);
    assert_relative_eq!(camera.translation.x, control.lateral_position as f32);
    assert_relative_eq!(camera.translation.y, 1.5);
    assert_relative_eq!(camera.translation.z, 10.0);

    let (_, _, roll) = camera.rotation.to_euler(EulerRot::XYZ);
    assert_relative_eq!(roll, (-10.0_f32).to_radians(), epsilon = 1e-5);

    let scenery = app.scenery_transforms();
    let pool = &app.driver().state().scenery;
    assert_eq!(scenery.len(), pool.len());
    for ((tag, transform), entity) in scenery.iter().zip(pool) {
        assert_eq!(tag.id, entity.id);
        assert_relative_eq!(transform.translation.z, entity.position.z as f32);
    }
    assert_eq!(scenery[0].0.kind, EntityKind::Runway);
}
