pub mod config;
mod driver;
mod simulation;
mod surface;

pub use config::{
    CameraConfig, ConfigSource, ControlConfig, GliderConfig, KeyBindings, RecycleConfig, SceneryLayout,
};
pub use driver::{DriverPhase, FrameDriver, FrameDriverBuilder};
pub use simulation::SimulationState;
pub use surface::{BevySurface, RenderSurface};
