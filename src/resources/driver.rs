use bevy::prelude::*;

use crate::components::{ControlInput, EntityTransform, InputState};
use crate::resources::{GliderConfig, RenderSurface, SimulationState};
use crate::utils::{GliderError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverPhase {
    #[default]
    Idle,
    Running,
}

/// Owns the simulation and runs one iteration per host tick in a fixed
/// order: sample input, update controls, advance the world, push transforms
/// to the surface and render.
///
/// The host schedules iterations; the driver never loops on its own.
#[derive(Resource, Debug, Clone)]
pub struct FrameDriver<S: RenderSurface> {
    config: GliderConfig,
    state: SimulationState,
    surface: S,
    phase: DriverPhase,
    transforms: Vec<EntityTransform>,
}

impl<S: RenderSurface> FrameDriver<S> {
    pub fn builder() -> FrameDriverBuilder<S> {
        FrameDriverBuilder::new()
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == DriverPhase::Running
    }

    /// Idle -> Running. The driver never returns to Idle.
    pub fn start(&mut self) {
        match self.phase {
            DriverPhase::Idle => {
                self.phase = DriverPhase::Running;
                info!(
                    "Frame driver running with {} scenery entities",
                    self.state.scenery.len()
                );
            }
            DriverPhase::Running => warn!("Frame driver already running"),
        }
    }

    /// Runs a single iteration. Returns false without touching any state
    /// while the driver is still idle.
    pub fn run_iteration(&mut self, input: &InputState) -> bool {
        if !self.is_running() {
            return false;
        }

        let controls = ControlInput::sample(input, &self.config.bindings);
        self.state.step(&controls, &self.config);

        self.surface
            .set_camera(self.state.camera_transform(&self.config.camera));
        self.state.write_entity_transforms(&mut self.transforms);
        self.surface.set_entities(&self.transforms);
        self.surface.render_frame();

        true
    }

    pub fn ticks(&self) -> u64 {
        self.state.ticks
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &GliderConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

pub struct FrameDriverBuilder<S> {
    config: Option<GliderConfig>,
    surface: Option<S>,
}

impl<S: RenderSurface> FrameDriverBuilder<S> {
    pub fn new() -> Self {
        Self {
            config: None,
            surface: None,
        }
    }

    pub fn config(mut self, config: GliderConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Fails if no surface was attached, the surface is not ready or the
    /// configuration is invalid. There is no partial mode to fall back to.
    pub fn build(self) -> Result<FrameDriver<S>> {
        let surface = self.surface.ok_or(GliderError::MissingRenderSurface)?;
        surface.check_ready()?;

        let config = self.config.unwrap_or_default();
        config.validate()?;

        let state = SimulationState::from_config(&config);
        let transforms = Vec::with_capacity(state.scenery.len());

        Ok(FrameDriver {
            config,
            state,
            surface,
            phase: DriverPhase::Idle,
            transforms,
        })
    }
}

impl<S: RenderSurface> Default for FrameDriverBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
