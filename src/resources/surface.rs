use crate::components::{CameraTransform, EntityTransform};
use crate::utils::Result;

/// The renderer side of the frame driver.
///
/// A surface receives the camera and entity placements for a tick and then
/// a request to render them. It never writes back into the simulation.
pub trait RenderSurface: Send + Sync + 'static {
    fn set_camera(&mut self, camera: CameraTransform);

    fn set_entities(&mut self, entities: &[EntityTransform]);

    fn render_frame(&mut self);

    /// Checked once when the driver is built; an error aborts startup.
    fn check_ready(&self) -> Result<()> {
        Ok(())
    }
}

/// Surface backed by the bevy renderer.
///
/// Frames are buffered here from `FixedUpdate` and copied onto the camera
/// and scenery `Transform`s by the present system in `Update`.
#[derive(Debug, Clone, Default)]
pub struct BevySurface {
    camera: Option<CameraTransform>,
    entities: Vec<EntityTransform>,
    frames_rendered: u64,
    pending: bool,
}

impl BevySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera(&self) -> Option<&CameraTransform> {
        self.camera.as_ref()
    }

    pub fn entities(&self) -> &[EntityTransform] {
        &self.entities
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Returns true once per rendered frame that has not been presented yet.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl RenderSurface for BevySurface {
    fn set_camera(&mut self, camera: CameraTransform) {
        self.camera = Some(camera);
    }

    fn set_entities(&mut self, entities: &[EntityTransform]) {
        self.entities.clear();
        self.entities.extend_from_slice(entities);
    }

    fn render_frame(&mut self) {
        self.frames_rendered += 1;
        self.pending = true;
    }
}
