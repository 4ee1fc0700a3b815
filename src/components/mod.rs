pub mod camera;
pub mod control;
pub mod input;
pub mod scenery;

pub use camera::{CameraTransform, GliderCamera};
pub use control::ControlState;
pub use input::{ControlInput, ControlKey, InputState};
pub use scenery::{EntityKind, EntityTransform, SceneryTag, WorldEntity};
