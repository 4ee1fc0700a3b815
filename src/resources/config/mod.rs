pub mod bindings;
pub mod camera;
pub mod control;
pub mod scenery;
pub mod simulation;

pub use bindings::KeyBindings;
pub use camera::CameraConfig;
pub use control::ControlConfig;
pub use scenery::{RecycleConfig, SceneryLayout};
pub use simulation::{ConfigSource, GliderConfig};
