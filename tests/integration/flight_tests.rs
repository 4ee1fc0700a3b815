use approx::assert_relative_eq;
use bevy::prelude::*;
use glider::resources::GliderConfig;

use crate::common::{assert_control_within, assert_scenery_in_corridor, TestAppBuilder};

#[test]
fn test_idle_flight_stays_level() {
    let mut app = TestAppBuilder::new().build();
    app.run_ticks(100);

    let control = app.driver().state().control;
    assert_eq!(control.lateral_position, 0.0);
    assert_eq!(control.roll_angle, 0.0);
    assert_eq!(control.yaw_angle, 0.0);
    assert_eq!(control.pitch_angle, 0.0);
}

#[test]
fn test_left_rudder_held_for_a_second() {
    let mut app = TestAppBuilder::new().build();
    app.input_mut().press(KeyCode::KeyA);
    app.run_ticks(60);

    let control = app.driver().state().control;
    assert_eq!(control.yaw_angle, -45.0);
    assert_eq!(control.roll_angle, 30.0);
    assert_control_within(&control, &app.driver().config().control);
}

#[test]
fn test_pitch_returns_toward_level_after_release() {
    let mut app = TestAppBuilder::new().build();
    app.input_mut().press(KeyCode::KeyW);
    app.run_ticks(10);

    let pitched = app.driver().state().control.pitch_angle;
    assert_relative_eq!(pitched, 5.0);

    app.input_mut().release(KeyCode::KeyW);
    app.run_ticks(20);

    let decayed = app.driver().state().control.pitch_angle;
    assert_relative_eq!(decayed, 5.0 * 0.95_f64.powi(20), epsilon = 1e-9);
}

#[test]
fn test_mixed_input_keeps_axes_bounded() {
    let mut app = TestAppBuilder::new().build();
    let config = app.driver().config().control.clone();
    let keys = [
        KeyCode::ArrowLeft,
        KeyCode::KeyD,
        KeyCode::ArrowDown,
        KeyCode::ArrowRight,
        KeyCode::KeyA,
        KeyCode::ArrowUp,
    ];

    for (i, key) in keys.iter().cycle().take(24).enumerate() {
        if i % 2 == 0 {
            app.input_mut().press(*key);
        } else {
            app.input_mut().release(keys[(i + 3) % keys.len()]);
        }
        app.run_ticks(25);
        assert_control_within(&app.driver().state().control, &config);
    }
}

#[test]
fn test_world_scrolls_without_input() {
    let mut app = TestAppBuilder::new().build();
    app.run_ticks(1000);

    let driver = app.driver();
    assert_scenery_in_corridor(&driver.state().scenery, &driver.config().recycle);
}

#[test]
fn test_runway_advances_once_per_tick() {
    let mut config = GliderConfig::default();
    config.tick_hz = 120.0;
    let mut app = TestAppBuilder::new().with_config(config).build();
    app.run_ticks(40);

    let runway = &app.driver().state().scenery[0];
    assert_eq!(runway.position.z, -200.0 + 40.0 * 1.25);
}
