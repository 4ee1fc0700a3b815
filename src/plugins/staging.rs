use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildScenery,
    BuildCameras,
    StartDriver,
}

/// Ordering of the per-frame work across bevy's schedules.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    /// Keyboard events into `InputState` (PreUpdate).
    Sample,
    /// Frame driver iteration (FixedUpdate).
    Drive,
    /// Surface frame onto transforms (Update).
    Present,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildScenery,
                StartupStage::BuildCameras,
                StartupStage::StartDriver,
            )
                .chain(),
        );
    }
}
