//! Utilities for engine initialization and the main loop.

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::{Config, ENGINE_NAME, ENGINE_VERSION};
use crate::ecs::{EntityId, World};
use crate::error::EntityError;
use crate::graphics::RenderTarget;

mod tests;

/// Type which represents duration between two frames.
pub type DeltaTime = Duration;

/// Stage of the main loop in which an entity failure happened.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Initialize,
    Update,
    Render,
    Destroy,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Initialize => "initialize",
            Self::Update => "update",
            Self::Render => "render",
            Self::Destroy => "destroy",
        };
        f.write_str(name)
    }
}

/// Entity failure observed by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub entity: EntityId,
    /// Frame during which failure happened, if any.
    pub frame: Option<u64>,
    pub phase: Phase,
    pub error: EntityError,
}

/// Outcome of the [`Application::run`] call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunReport {
    /// Amount of frames presented to the render target.
    pub frames: u64,
    /// Every entity failure in order of occurrence.
    pub failures: Vec<Failure>,
}

impl RunReport {
    /// Returns `true` if no entity failed during the run.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// General context of game engine: owns render target and all entities.
pub struct Application<T>
where
    T: RenderTarget,
{
    config: Config,
    target: T,
    world: World,
}

impl<T> Application<T>
where
    T: RenderTarget,
{
    /// Creates application with an empty world.
    pub fn new(config: Config, target: T) -> Self {
        Self::with_world(config, target, World::new())
    }

    /// Creates application with already populated world.
    pub fn with_world(config: Config, target: T, world: World) -> Self {
        log::info!(
            "application \"{}\" v{} created with {} v{}",
            config.name(),
            config.version(),
            ENGINE_NAME,
            *ENGINE_VERSION,
        );
        Self {
            config,
            target,
            world,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Releases the render target and the world.
    pub fn into_parts(self) -> (T, World) {
        (self.target, self.world)
    }

    /// Starts execution of game engine.
    ///
    /// Initializes all entities, then updates and renders them every frame
    /// while render target is open, then destroys them.
    /// Entity failures do not stop the loop: they are logged and collected into the report.
    ///
    pub fn run(&mut self) -> RunReport {
        let mut report = RunReport::default();

        let failures = self.world.initialize();
        collect(&mut report, None, Phase::Initialize, failures);
        log::info!("{} entities initialized", self.world.len());

        let mut last_frame: Option<Instant> = None;
        while self.target.is_open() {
            for event in self.target.handle_events() {
                log::debug!("event handled: {:?}", event);
            }
            if !self.target.is_open() {
                break;
            }

            let now = Instant::now();
            let delta_time = last_frame
                .map(|last| now.duration_since(last))
                .unwrap_or(DeltaTime::ZERO);
            last_frame = Some(now);
            let frame = Some(report.frames);

            let failures = self.world.update(delta_time.as_secs_f32());
            collect(&mut report, frame, Phase::Update, failures);

            self.target.clear(self.config.clear_color());
            let failures = self.world.render(&mut self.target);
            collect(&mut report, frame, Phase::Render, failures);
            self.target.display();

            report.frames += 1;
        }

        let failures = self.world.destroy();
        collect(&mut report, None, Phase::Destroy, failures);
        log::info!(
            "closing this application after {} frames with {} failures",
            report.frames,
            report.failures.len(),
        );
        report
    }
}

fn collect(
    report: &mut RunReport,
    frame: Option<u64>,
    phase: Phase,
    failures: Vec<(EntityId, EntityError)>,
) {
    for (entity, error) in failures {
        log::error!("entity {:?} failed to {}: {}", entity, phase, error);
        report.failures.push(Failure {
            entity,
            frame,
            phase,
            error,
        });
    }
}
