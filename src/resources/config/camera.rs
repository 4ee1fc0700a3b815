use serde::{Deserialize, Serialize};

use crate::utils::{GliderError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fixed eye height above the runway.
    pub height: f64,
    /// Camera z; scenery streams past this plane.
    pub forward_offset: f64,
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub fog_start: f32,
    pub fog_end: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            height: 1.5,
            forward_offset: 10.0,
            fov_degrees: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            fog_start: 100.0,
            fog_end: 1000.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.height.is_finite() || !self.forward_offset.is_finite() {
            return Err(GliderError::InvalidConfig(
                "camera position must be finite".to_string(),
            ));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(GliderError::InvalidConfig(format!(
                "camera.fov_degrees must lie in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(GliderError::InvalidConfig(format!(
                "camera clip planes must satisfy 0 < znear < zfar, got {} and {}",
                self.znear, self.zfar
            )));
        }
        if self.fog_end < self.fog_start {
            return Err(GliderError::InvalidConfig(
                "camera.fog_end must not be before fog_start".to_string(),
            ));
        }
        Ok(())
    }
}
