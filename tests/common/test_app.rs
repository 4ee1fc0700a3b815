use bevy::input::keyboard::{Key, KeyboardFocusLost, KeyboardInput, NativeKey};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use glider::{
    components::{GliderCamera, InputState, SceneryTag},
    plugins::FlightPlugin,
    resources::{BevySurface, ConfigSource, FrameDriver, GliderConfig},
};

/// Builder for a headless app running the flight plugin.
pub struct TestAppBuilder {
    config: GliderConfig,
    source: ConfigSource,
    with_present_targets: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: GliderConfig::default(),
            source: ConfigSource::Defaults,
            with_present_targets: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GliderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_source(mut self, source: ConfigSource) -> Self {
        self.source = source;
        self
    }

    /// Spawns a bare camera and one tagged entity per pooled scenery item so
    /// the present system has transforms to write.
    pub fn with_present_targets(mut self) -> Self {
        self.with_present_targets = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        let step = Duration::from_secs_f64(self.config.tick_seconds());
        let flight = FlightPlugin::new(self.config)
            .expect("valid test config")
            .with_source(self.source);

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(step))
            .add_plugins(flight);

        if self.with_present_targets {
            let tags: Vec<SceneryTag> = {
                let driver = app.world().resource::<FrameDriver<BevySurface>>();
                driver
                    .state()
                    .scenery
                    .iter()
                    .map(|entity| SceneryTag {
                        id: entity.id,
                        kind: entity.kind,
                    })
                    .collect()
            };

            let world = app.world_mut();
            world.spawn((GliderCamera, Transform::IDENTITY));
            for tag in tags {
                world.spawn((tag, Transform::IDENTITY));
            }
        }

        // Run startup
        app.update();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn driver(&self) -> &FrameDriver<BevySurface> {
        self.app.world().resource::<FrameDriver<BevySurface>>()
    }

    pub fn ticks(&self) -> u64 {
        self.driver().ticks()
    }

    pub fn input_mut(&mut self) -> Mut<InputState> {
        self.app.world_mut().resource_mut::<InputState>()
    }

    pub fn input(&self) -> &InputState {
        self.app.world().resource::<InputState>()
    }

    /// Queues a hardware key event for the sampler, as the window backend
    /// would. It is recorded on the next update.
    pub fn send_key(&mut self, key_code: KeyCode, state: ButtonState) {
        self.app.world_mut().send_event(KeyboardInput {
            key_code,
            logical_key: Key::Unidentified(NativeKey::Unidentified),
            state,
            repeat: false,
            window: Entity::PLACEHOLDER,
        });
    }

    pub fn lose_focus(&mut self) {
        self.app.world_mut().send_event(KeyboardFocusLost);
    }

    /// Updates until the driver has run `ticks` more fixed ticks.
    pub fn run_ticks(&mut self, ticks: u64) {
        let target = self.ticks() + ticks;
        for _ in 0..ticks * 4 + 10 {
            if self.ticks() >= target {
                return;
            }
            self.app.update();
        }
        panic!("driver stalled at {} of {} ticks", self.ticks(), target);
    }

    pub fn camera_transform(&mut self) -> Option<Transform> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<GliderCamera>>();
        query.get_single(world).ok().copied()
    }

    pub fn scenery_transforms(&mut self) -> Vec<(SceneryTag, Transform)> {
        let world = self.app.world_mut();
        let mut query = world.query::<(&SceneryTag, &Transform)>();
        let mut out: Vec<_> = query.iter(world).map(|(t, tr)| (*t, *tr)).collect();
        out.sort_by_key(|(tag, _)| tag.id);
        out
    }
}
