use bevy::input::keyboard::{KeyboardFocusLost, KeyboardInput};
use bevy::prelude::*;

use crate::components::InputState;

/// Records every keyboard press and release into the shared input state.
///
/// Runs on bevy's main thread ahead of the fixed tick, so the flight model
/// always reads a settled map. Losing focus releases every key.
pub fn keyboard_sampler_system(
    mut events: EventReader<KeyboardInput>,
    mut focus_lost: EventReader<KeyboardFocusLost>,
    mut input: ResMut<InputState>,
) {
    for event in events.read() {
        input.record(event.key_code, event.state.is_pressed());
    }

    if !focus_lost.is_empty() {
        focus_lost.clear();
        debug!("Keyboard focus lost, releasing all keys");
        input.clear();
    }
}
