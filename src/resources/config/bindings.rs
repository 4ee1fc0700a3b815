use bevy::prelude::KeyCode;
use serde::{Deserialize, Serialize};

use crate::components::ControlKey;

/// Physical keys bound to each logical control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub roll_left: Vec<KeyCode>,
    pub roll_right: Vec<KeyCode>,
    pub yaw_left: Vec<KeyCode>,
    pub yaw_right: Vec<KeyCode>,
    pub pitch_up: Vec<KeyCode>,
    pub pitch_down: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            roll_left: vec![KeyCode::ArrowLeft],
            roll_right: vec![KeyCode::ArrowRight],
            yaw_left: vec![KeyCode::KeyA],
            yaw_right: vec![KeyCode::KeyD],
            pitch_up: vec![KeyCode::ArrowUp, KeyCode::KeyW],
            pitch_down: vec![KeyCode::ArrowDown, KeyCode::KeyS],
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, control: ControlKey) -> &[KeyCode] {
        match control {
            ControlKey::RollLeft => &self.roll_left,
            ControlKey::RollRight => &self.roll_right,
            ControlKey::YawLeft => &self.yaw_left,
            ControlKey::YawRight => &self.yaw_right,
            ControlKey::PitchUp => &self.pitch_up,
            ControlKey::PitchDown => &self.pitch_down,
        }
    }

    /// Replaces the keys bound to a control.
    pub fn bind(&mut self, control: ControlKey, keys: Vec<KeyCode>) {
        match control {
            ControlKey::RollLeft => self.roll_left = keys,
            ControlKey::RollRight => self.roll_right = keys,
            ControlKey::YawLeft => self.yaw_left = keys,
            ControlKey::YawRight => self.yaw_right = keys,
            ControlKey::PitchUp => self.pitch_up = keys,
            ControlKey::PitchDown => self.pitch_down = keys,
        }
    }
}
