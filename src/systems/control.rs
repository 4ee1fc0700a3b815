use crate::components::{ControlInput, ControlState};
use crate::resources::ControlConfig;

/// Runs the flight control model for one tick.
///
/// The rules are applied in a fixed order, each one an additive update
/// clamped to its axis limit:
/// 1. ailerons roll the glider,
/// 2. the rudder yaws it and adds coupled roll,
/// 3. yaw and bank make the glider drift sideways,
/// 4. the elevator pitches it, or pitch decays back toward level,
/// 5. the lateral position is clamped.
///
/// Roll is never auto-levelled: without input it keeps its current trim.
pub fn tick(state: &ControlState, input: &ControlInput, config: &ControlConfig) -> ControlState {
    let mut next = *state;

    apply_ailerons(&mut next, input, config);
    apply_rudder(&mut next, input, config);
    apply_drift(&mut next, config);
    apply_elevator(&mut next, input, config);

    next.lateral_position = next
        .lateral_position
        .clamp(-config.lateral_limit, config.lateral_limit);

    next
}

/// +1 for left, -1 for right, 0 for neither. Left wins when both are held.
fn deflection(left: bool, right: bool) -> f64 {
    if left {
        1.0
    } else if right {
        -1.0
    } else {
        0.0
    }
}

fn apply_ailerons(state: &mut ControlState, input: &ControlInput, config: &ControlConfig) {
    let aileron = deflection(input.roll_left, input.roll_right);
    if aileron != 0.0 {
        state.roll_angle = (state.roll_angle + aileron * config.roll_rate)
            .clamp(-config.roll_limit, config.roll_limit);
    }
}

/// Left rudder yaws the nose left (negative yaw) and banks the same way as
/// left aileron. The coupled roll goes through the same clamped roll axis.
fn apply_rudder(state: &mut ControlState, input: &ControlInput, config: &ControlConfig) {
    let rudder = deflection(input.yaw_left, input.yaw_right);
    if rudder == 0.0 {
        return;
    }

    state.yaw_angle =
        (state.yaw_angle - rudder * config.yaw_rate).clamp(-config.yaw_limit, config.yaw_limit);
    state.roll_angle = (state.roll_angle + rudder * config.rudder_roll_coupling)
        .clamp(-config.roll_limit, config.roll_limit);
}

/// Applied every tick regardless of input.
fn apply_drift(state: &mut ControlState, config: &ControlConfig) {
    state.lateral_position += state.yaw_angle * config.yaw_drift;
    state.lateral_position -= state.roll_angle * config.bank_drift;
}

fn apply_elevator(state: &mut ControlState, input: &ControlInput, config: &ControlConfig) {
    // Up takes priority over down, matching the ailerons and rudder
    let elevator = deflection(input.pitch_up, input.pitch_down);
    if elevator != 0.0 {
        state.pitch_angle = (state.pitch_angle + elevator * config.pitch_rate)
            .clamp(-config.pitch_limit, config.pitch_limit);
    } else {
        state.pitch_angle *= config.pitch_decay;
    }
}
