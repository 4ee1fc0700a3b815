use bevy::input::keyboard::{KeyboardFocusLost, KeyboardInput};
use bevy::input::InputSystem;
use bevy::prelude::*;

use crate::components::InputState;
use crate::plugins::{FlightSet, StartupSequencePlugin, StartupStage};
use crate::resources::{BevySurface, ConfigSource, FrameDriver, GliderConfig};
use crate::systems::{
    driver_running, frame_driver_system, keyboard_sampler_system, log_config_source_system,
    present_frame_system, start_driver_system,
};
use crate::utils::Result;

/// Flight control, world recycling and the frame driver, without any
/// rendering. Works under `MinimalPlugins`.
pub struct FlightPlugin {
    driver: FrameDriver<BevySurface>,
    source: ConfigSource,
}

impl FlightPlugin {
    /// Builds the frame driver up front so a bad configuration stops the
    /// program before the app starts.
    pub fn new(config: GliderConfig) -> Result<Self> {
        let driver = FrameDriver::builder()
            .config(config)
            .surface(BevySurface::new())
            .build()?;
        Ok(Self {
            driver,
            source: ConfigSource::Defaults,
        })
    }

    /// Records where the configuration came from; logged at startup.
    pub fn with_source(mut self, source: ConfigSource) -> Self {
        self.source = source;
        self
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        let tick_hz = self.driver.config().tick_hz;
        info!("FlightPlugin ticking at {} Hz", tick_hz);

        app.add_event::<KeyboardInput>()
            .add_event::<KeyboardFocusLost>()
            .init_resource::<InputState>()
            .insert_resource(self.source.clone())
            .insert_resource(self.driver.clone())
            .insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .add_systems(
                Startup,
                (log_config_source_system, start_driver_system)
                    .chain()
                    .in_set(StartupStage::StartDriver),
            )
            .add_systems(
                PreUpdate,
                keyboard_sampler_system
                    .in_set(FlightSet::Sample)
                    .after(InputSystem),
            )
            .add_systems(
                FixedUpdate,
                frame_driver_system
                    .in_set(FlightSet::Drive)
                    .run_if(driver_running),
            )
            .add_systems(Update, present_frame_system.in_set(FlightSet::Present));
    }
}
