use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::{CameraConfig, ControlConfig, KeyBindings, RecycleConfig, SceneryLayout};
use crate::utils::{GliderError, Result, DEFAULT_TICK_HZ, MAX_TICK_HZ, MIN_TICK_HZ};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GliderConfig {
    /// Fixed simulation ticks per second, independent of display refresh.
    pub tick_hz: f64,
    pub control: ControlConfig,
    pub camera: CameraConfig,
    pub scenery: SceneryLayout,
    pub recycle: RecycleConfig,
    pub bindings: KeyBindings,
}

impl Default for GliderConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            control: ControlConfig::default(),
            camera: CameraConfig::default(),
            scenery: SceneryLayout::default(),
            recycle: RecycleConfig::default(),
            bindings: KeyBindings::default(),
        }
    }
}

impl GliderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `<config_dir>/glider/config.yaml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glider").join("config.yaml"))
    }

    /// Loads the explicit path if given, otherwise the default path if a file
    /// exists there, otherwise falls back to built-in defaults.
    ///
    /// Nothing is logged here because this runs before the app installs a
    /// log subscriber. The returned source is logged once the app starts.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                let config = Self::load(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    pub fn tick_seconds(&self) -> f64 {
        1.0 / self.tick_hz
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_TICK_HZ..=MAX_TICK_HZ).contains(&self.tick_hz) {
            return Err(GliderError::InvalidConfig(format!(
                "tick_hz must lie in [{MIN_TICK_HZ}, {MAX_TICK_HZ}], got {}",
                self.tick_hz
            )));
        }
        self.control.validate()?;
        self.camera.validate()?;
        self.scenery.validate()?;
        self.recycle.validate()?;
        Ok(())
    }
}

/// Where the active configuration came from.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    File(PathBuf),
    #[default]
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}
