#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Simulation loop that runs the agent and every emitter as concurrent actors.
//!
//! One thread drives the agent from the input collaborator, one thread per
//! emitter site drives its [`HazardEngine`]. All of them poll the world's
//! `over` flag and leave their loops once it is set; the loop then joins
//! every actor and reports the outcome.

mod display;

use std::{
    thread,
    time::{Duration, Instant},
};

use galaxy_voyager_core::{Canvas, InputSource, Outcome, RandomSource, FRAME_PAUSE};
use galaxy_voyager_system_hazards::{Config as HazardConfig, HazardEngine, Transition};
use galaxy_voyager_system_movement::MovementResolver;
use galaxy_voyager_world::{query, World};
use thiserror::Error;
use tracing::{debug, info};

pub use display::Display;

/// Configuration parameters required to construct the simulation loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    hazards: HazardConfig,
    frame_pause: Duration,
}

impl Config {
    /// Creates a new configuration from the hazard cadence and the pause
    /// emitter actors take after each pass.
    #[must_use]
    pub const fn new(hazards: HazardConfig, frame_pause: Duration) -> Self {
        Self {
            hazards,
            frame_pause,
        }
    }

    /// Cadence shared by every hazard engine.
    #[must_use]
    pub const fn hazards(&self) -> HazardConfig {
        self.hazards
    }

    /// Pause taken by emitter actors between two passes.
    #[must_use]
    pub const fn frame_pause(&self) -> Duration {
        self.frame_pause
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(HazardConfig::default(), FRAME_PAUSE)
    }
}

/// Summary of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// How the run ended.
    pub outcome: Outcome,
    /// Targets collected.
    pub score: u32,
    /// Targets seeded onto the board.
    pub target_count: u32,
    /// Hazards launched across every emitter.
    pub hazards_launched: u64,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Reasons a run ends without a regular outcome.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// An actor thread panicked; the remaining actors were halted.
    #[error("the {actor} actor panicked")]
    ActorPanicked {
        /// Name of the actor that died.
        actor: String,
    },
    /// Every actor stopped but no outcome was recorded.
    #[error("the run stopped without an outcome")]
    Halted,
}

/// Orchestrates one agent actor and one actor per emitter site.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationLoop {
    config: Config,
}

impl SimulationLoop {
    /// Creates a simulation loop using the supplied configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the simulation until the world reports the end of the run.
    ///
    /// `random_for` provides the random source of the emitter with the given
    /// index. The outcome banner is shown once every actor has stopped.
    pub fn run<C, I, R, F>(
        &self,
        world: &World,
        display: &Display<C>,
        input: I,
        mut random_for: F,
    ) -> Result<RunReport, SimulationError>
    where
        C: Canvas,
        I: InputSource,
        R: RandomSource,
        F: FnMut(usize) -> R,
    {
        let started = Instant::now();
        let engines: Vec<HazardEngine<R>> = query::emitters(world)
            .iter()
            .enumerate()
            .map(|(index, site)| {
                HazardEngine::new(*site, self.config.hazards, random_for(index), started)
            })
            .collect();

        info!(
            emitters = engines.len(),
            targets = query::target_count(world),
            "simulation started"
        );
        display.present(world);

        let pause = self.config.frame_pause;
        let (agent_result, emitter_results) = thread::scope(|scope| {
            let agent = scope.spawn(|| drive_agent(world, display, input));
            let emitters: Vec<_> = engines
                .into_iter()
                .map(|engine| {
                    scope.spawn(move || drive_emitter(engine, world, display, pause))
                })
                .collect();

            let agent_result = agent.join();
            let emitter_results: Vec<_> = emitters
                .into_iter()
                .map(|handle| handle.join())
                .collect();
            (agent_result, emitter_results)
        });

        if agent_result.is_err() {
            return Err(SimulationError::ActorPanicked {
                actor: "agent".to_owned(),
            });
        }

        let mut hazards_launched = 0;
        for (index, result) in emitter_results.into_iter().enumerate() {
            match result {
                Ok(launched) => hazards_launched += launched,
                Err(_) => {
                    return Err(SimulationError::ActorPanicked {
                        actor: format!("emitter {index}"),
                    });
                }
            }
        }

        let outcome = query::outcome(world).ok_or(SimulationError::Halted)?;
        display.announce(outcome);

        let report = RunReport {
            outcome,
            score: query::score(world),
            target_count: query::target_count(world),
            hazards_launched,
            elapsed: started.elapsed(),
        };
        info!(
            ?outcome,
            score = report.score,
            hazards_launched,
            "simulation finished"
        );
        Ok(report)
    }
}

/// Halts the world when dropped during a panic so the other actors stop.
struct HaltOnPanic<'world>(&'world World);

impl Drop for HaltOnPanic<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.halt();
        }
    }
}

fn drive_agent<C, I>(world: &World, display: &Display<C>, mut input: I)
where
    C: Canvas,
    I: InputSource,
{
    let _halt = HaltOnPanic(world);
    debug!("agent actor started");

    while !query::is_over(world) {
        let Some(direction) = input.next_direction() else {
            continue;
        };
        let outcome = MovementResolver.resolve(world, direction);
        debug!(?direction, ?outcome, "agent move resolved");
        display.present(world);
    }

    debug!("agent actor stopped");
}

fn drive_emitter<C, R>(
    mut engine: HazardEngine<R>,
    world: &World,
    display: &Display<C>,
    pause: Duration,
) -> u64
where
    C: Canvas,
    R: RandomSource,
{
    let _halt = HaltOnPanic(world);
    debug!(site = ?engine.site(), "emitter actor started");

    while !query::is_over(world) {
        let now = Instant::now();
        for transition in engine.advance(world, now) {
            if let Transition::Struck { wreck } = transition {
                info!(site = ?engine.site(), cell = ?wreck, "hazard hit the agent");
            }
        }
        let _ = engine.spawn_if_due(now);

        display.present(world);
        thread::sleep(pause);
    }

    debug!(site = ?engine.site(), launched = engine.launched(), "emitter actor stopped");
    engine.launched()
}
