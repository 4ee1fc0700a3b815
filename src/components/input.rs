use bevy::prelude::*;
use std::collections::HashMap;

use crate::resources::KeyBindings;

/// Logical cockpit controls the flight model understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    RollLeft,
    RollRight,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
}

/// Live pressed/released state of the physical keys.
///
/// Each key event overwrites the entry for its key, so the map only ever
/// reflects the most recent hardware event. Keys that were never seen read
/// as released.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<KeyCode, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: KeyCode, pressed: bool) {
        self.keys.insert(key, pressed);
    }

    pub fn press(&mut self, key: KeyCode) {
        self.record(key, true);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.record(key, false);
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).copied().unwrap_or(false)
    }

    /// Releases every key. Called when the window loses keyboard focus, since
    /// the release events for keys held at that moment never arrive.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// The per-tick snapshot of logical controls handed to the flight model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub roll_left: bool,
    pub roll_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

impl ControlInput {
    /// Resolves the physical key state through the bindings. A logical
    /// control is active when any of its bound keys is held.
    pub fn sample(input: &InputState, bindings: &KeyBindings) -> Self {
        let held = |control: ControlKey| {
            bindings
                .keys_for(control)
                .iter()
                .any(|key| input.is_pressed(*key))
        };

        Self {
            roll_left: held(ControlKey::RollLeft),
            roll_right: held(ControlKey::RollRight),
            yaw_left: held(ControlKey::YawLeft),
            yaw_right: held(ControlKey::YawRight),
            pitch_up: held(ControlKey::PitchUp),
            pitch_down: held(ControlKey::PitchDown),
        }
    }

    pub fn with(mut self, control: ControlKey) -> Self {
        match control {
            ControlKey::RollLeft => self.roll_left = true,
            ControlKey::RollRight => self.roll_right = true,
            ControlKey::YawLeft => self.yaw_left = true,
            ControlKey::YawRight => self.yaw_right = true,
            ControlKey::PitchUp => self.pitch_up = true,
            ControlKey::PitchDown => self.pitch_down = true,
        }
        self
    }
}
