use bevy::prelude::*;

/// Marker for the cockpit camera entity.
#[derive(Component, Debug, Default)]
pub struct GliderCamera;

/// Camera placement pushed to the render surface each tick.
///
/// Rotations are in radians and follow the camera's local axes: `rotation_x`
/// is pitch, `rotation_y` is heading and `rotation_z` is bank.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraTransform {
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub rotation_z: f64,
}

impl CameraTransform {
    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: Vec3::new(
                self.position_x as f32,
                self.position_y as f32,
                self.position_z as f32,
            ),
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                self.rotation_x as f32,
                self.rotation_y as f32,
                self.rotation_z as f32,
            ),
            scale: Vec3::ONE,
        }
    }
}
