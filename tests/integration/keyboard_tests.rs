use approx::assert_relative_eq;
use bevy::input::ButtonState;
use bevy::prelude::*;

use crate::common::TestAppBuilder;

#[test]
fn test_key_events_drive_rudder() {
    let mut app = TestAppBuilder::new().build();

    app.send_key(KeyCode::KeyA, ButtonState::Pressed);
    app.run_ticks(10);
    assert!(app.input().is_pressed(KeyCode::KeyA));

    let control = app.driver().state().control;
    assert_relative_eq!(control.yaw_angle, -8.0, epsilon = 1e-9);
    assert_relative_eq!(control.roll_angle, 6.5, epsilon = 1e-9);

    app.send_key(KeyCode::KeyA, ButtonState::Released);
    app.run_ticks(5);
    assert!(!app.input().is_pressed(KeyCode::KeyA));

    // Yaw and roll have no restoring force
    let held = app.driver().state().control;
    assert_eq!(held.yaw_angle, control.yaw_angle);
    assert_eq!(held.roll_angle, control.roll_angle);
}

#[test]
fn test_key_event_reaches_next_tick() {
    let mut app = TestAppBuilder::new().build();

    // Sampled in PreUpdate, so the first tick after the event already sees it
    app.send_key(KeyCode::ArrowLeft, ButtonState::Pressed);
    app.run_ticks(1);
    assert_eq!(app.driver().state().control.roll_angle, 1.0);

    app.send_key(KeyCode::ArrowLeft, ButtonState::Released);
    app.run_ticks(1);
    assert_eq!(app.driver().state().control.roll_angle, 1.0);
}

#[test]
fn test_unbound_key_is_recorded_but_ignored() {
    let mut app = TestAppBuilder::new().build();

    app.send_key(KeyCode::Space, ButtonState::Pressed);
    app.run_ticks(10);

    assert!(app.input().is_pressed(KeyCode::Space));
    let control = app.driver().state().control;
    assert_eq!(control.roll_angle, 0.0);
    assert_eq!(control.yaw_angle, 0.0);
}

#[test]
fn test_focus_loss_releases_held_keys() {
    let mut app = TestAppBuilder::new().build();

    app.send_key(KeyCode::ArrowRight, ButtonState::Pressed);
    app.send_key(KeyCode::KeyW, ButtonState::Pressed);
    app.run_ticks(4);
    assert_eq!(app.driver().state().control.roll_angle, -4.0);

    app.lose_focus();
    app.run_ticks(4);

    assert!(!app.input().is_pressed(KeyCode::ArrowRight));
    assert!(!app.input().is_pressed(KeyCode::KeyW));
    let control = app.driver().state().control;
    assert_eq!(control.roll_angle, -4.0);
    assert!(control.pitch_angle < 2.0);
}
