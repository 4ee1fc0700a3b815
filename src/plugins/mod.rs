mod flight;
mod scene;
mod staging;

pub use flight::FlightPlugin;
pub use scene::ScenePlugin;
pub use staging::{FlightSet, StartupSequencePlugin, StartupStage};
