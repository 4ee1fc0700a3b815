use crate::components::{CameraTransform, ControlInput, ControlState, EntityTransform, WorldEntity};
use crate::resources::{CameraConfig, GliderConfig};
use crate::systems::{advance, tick};

/// Everything that changes from one tick to the next.
///
/// The control state is only written by the flight control model and the
/// scenery pool only by the world recycler; the frame driver reads both.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub control: ControlState,
    pub scenery: Vec<WorldEntity>,
    pub ticks: u64,
}

impl SimulationState {
    pub fn from_config(config: &GliderConfig) -> Self {
        Self {
            control: ControlState::default(),
            scenery: config.scenery.build(),
            ticks: 0,
        }
    }

    /// Advances one tick: controls first, then the world, so the frame
    /// rendered afterwards already reflects this tick's input.
    pub fn step(&mut self, input: &ControlInput, config: &GliderConfig) {
        self.control = tick(&self.control, input, &config.control);
        advance(&mut self.scenery, &config.recycle);
        self.ticks += 1;
    }

    pub fn camera_transform(&self, camera: &CameraConfig) -> CameraTransform {
        self.control.camera_transform(camera)
    }

    /// Writes the transform of every pooled entity into `out`, replacing its
    /// previous contents.
    pub fn write_entity_transforms(&self, out: &mut Vec<EntityTransform>) {
        out.clear();
        out.extend(self.scenery.iter().map(WorldEntity::transform));
    }
}
