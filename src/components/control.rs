
use crate::components::CameraTransform;
use crate::resources::{CameraConfig, ControlConfig};

/// The four control axes of the glider. Angles are in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlState {
    /// Sideways offset of the camera from the runway centreline.
    pub lateral_position: f64,
    /// Bank angle, positive rolls the horizon clockwise.
    pub roll_angle: f64,
    /// Rudder heading offset, negative is nose left.
    pub yaw_angle: f64,
    /// Nose up/down attitude.
    pub pitch_angle: f64,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finite(&self) -> bool {
        self.lateral_position.is_finite()
            && self.roll_angle.is_finite()
            && self.yaw_angle.is_finite()
            && self.pitch_angle.is_finite()
    }

    /// True when all four axes sit inside the configured limits.
    pub fn is_within(&self, config: &ControlConfig) -> bool {
        self.is_finite()
            && self.lateral_position.abs() <= config.lateral_limit
            && self.roll_angle.abs() <= config.roll_limit
            && self.yaw_angle.abs() <= config.yaw_limit
            && self.pitch_angle.abs() <= config.pitch_limit
    }

    /// Maps the control axes onto the cockpit camera. Yaw is inverted so a
    /// positive (right) rudder command turns the view to the right.
    pub fn camera_transform(&self, camera: &CameraConfig) -> CameraTransform {
        CameraTransform {
            position_x: self.lateral_position,
            position_y: camera.height,
            position_z: camera.forward_offset,
            rotation_x: self.pitch_angle.to_radians(),
            rotation_y: (-self.yaw_angle).to_radians(),
            rotation_z: self.roll_angle.to_radians(),
        }
    }
}
