use bevy::prelude::*;
use std::path::PathBuf;

use glider::{
    plugins::{FlightPlugin, ScenePlugin, StartupSequencePlugin},
    resources::GliderConfig,
    utils::Result,
};

/// Resolves the configuration and builds the flight plugin. Runs before the
/// app exists, so failures are reported on stderr rather than through bevy's
/// log subscriber.
fn init() -> Result<FlightPlugin> {
    // Optional path to a YAML config as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, source) = GliderConfig::resolve(config_path.as_deref())?;

    Ok(FlightPlugin::new(config)?.with_source(source))
}

fn main() {
    let flight = match init() {
        Ok(flight) => flight,
        Err(err) => {
            eprintln!("Failed to initialize glider: {}", err);
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Glider".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((StartupSequencePlugin, flight, ScenePlugin))
        .run();
}
