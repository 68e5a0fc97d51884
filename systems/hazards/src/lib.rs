#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Hazard engine that launches and advances the hazards of one emitter site.
//!
//! Each emitter site gets its own [`HazardEngine`]. The engine privately owns
//! its in-flight hazards; no other actor ever touches them. Hazards move
//! through `Spawned -> Advancing -> (Retired | Struck)`, and every decision
//! that reads or writes the shared board is taken under a single acquisition
//! of the board-mutation lock.

use std::time::{Duration, Instant};

use galaxy_voyager_core::{
    CellCoord, Outcome, RandomSource, Symbol, Velocity, HAZARD_STEP_INTERVAL, SPAWN_INTERVAL,
};
use galaxy_voyager_world::{Grid, World};
use tracing::debug;

/// Configuration parameters required to construct a hazard engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    spawn_interval: Duration,
    step_interval: Duration,
}

impl Config {
    /// Creates a new configuration using the provided launch and step cadences.
    #[must_use]
    pub const fn new(spawn_interval: Duration, step_interval: Duration) -> Self {
        Self {
            spawn_interval,
            step_interval,
        }
    }

    /// Time between two launches from the same site.
    #[must_use]
    pub const fn spawn_interval(&self) -> Duration {
        self.spawn_interval
    }

    /// Minimum time between two steps of the same hazard.
    #[must_use]
    pub const fn step_interval(&self) -> Duration {
        self.step_interval
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL, HAZARD_STEP_INTERVAL)
    }
}

/// In-flight hazard owned by a single engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hazard {
    cell: CellCoord,
    velocity: Velocity,
    occluded: Symbol,
    last_advance: Instant,
}

impl Hazard {
    /// Cell the hazard currently occupies.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Displacement applied on every step.
    #[must_use]
    pub const fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Symbol hidden beneath the hazard, restored once it leaves.
    #[must_use]
    pub const fn occluded(&self) -> Symbol {
        self.occluded
    }

    /// Instant of the hazard's launch or latest step.
    #[must_use]
    pub const fn last_advance(&self) -> Instant {
        self.last_advance
    }
}

/// Decision taken for a hazard whose step came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The next cell is the boundary ring, an emitter site or another hazard.
    /// The hazard's cell got its occluded symbol back and the hazard is gone.
    Retired {
        /// Cell the hazard occupied.
        at: CellCoord,
        /// Symbol written back into that cell.
        restored: Symbol,
    },
    /// The next cell held the agent. The run is lost and the hazard is gone.
    Struck {
        /// Cell now holding the wreck.
        wreck: CellCoord,
    },
    /// The hazard moved one step.
    Advanced {
        /// Cell the hazard left, now showing its former occluded symbol.
        from: CellCoord,
        /// Cell the hazard now occupies.
        to: CellCoord,
    },
}

/// Classifies the step of `hazard` against the current board contents.
///
/// Retirement takes precedence over striking the agent, which takes
/// precedence over advancing. A stationary hazard computes its own cell as
/// the next one; right after launch that cell still shows the emitter site,
/// so it retires on its first step.
#[must_use]
pub fn classify(grid: &Grid, agent: CellCoord, hazard: &Hazard) -> Transition {
    let retired = Transition::Retired {
        at: hazard.cell,
        restored: hazard.occluded,
    };

    let Some(next) = hazard
        .cell
        .offset(hazard.velocity)
        .filter(|cell| grid.contains(*cell))
    else {
        return retired;
    };

    if grid.is_boundary(next) {
        return retired;
    }

    match grid.read(next) {
        Symbol::EmitterSite | Symbol::Hazard => retired,
        _ if next == agent => Transition::Struck { wreck: next },
        _ => Transition::Advanced {
            from: hazard.cell,
            to: next,
        },
    }
}

/// Launches and advances the hazards of a single emitter site.
#[derive(Debug)]
pub struct HazardEngine<R> {
    site: CellCoord,
    config: Config,
    random: R,
    hazards: Vec<Hazard>,
    last_spawn: Instant,
    launched: u64,
}

impl<R> HazardEngine<R>
where
    R: RandomSource,
{
    /// Creates an engine for `site` whose launch clock starts at `now`.
    #[must_use]
    pub fn new(site: CellCoord, config: Config, random: R, now: Instant) -> Self {
        Self {
            site,
            config,
            random,
            hazards: Vec::new(),
            last_spawn: now,
            launched: 0,
        }
    }

    /// Emitter site this engine launches from.
    #[must_use]
    pub const fn site(&self) -> CellCoord {
        self.site
    }

    /// Hazards currently in flight, in launch order.
    #[must_use]
    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    /// Number of hazards launched since the engine was created.
    #[must_use]
    pub const fn launched(&self) -> u64 {
        self.launched
    }

    /// Launches a hazard when a full spawn interval elapsed since the last one.
    ///
    /// The new hazard sits on the site cell, which already shows the emitter
    /// symbol, so the board is not touched.
    pub fn spawn_if_due(&mut self, now: Instant) -> Option<Velocity> {
        if now.saturating_duration_since(self.last_spawn) < self.config.spawn_interval {
            return None;
        }
        self.last_spawn = now;
        Some(self.launch(now))
    }

    /// Launches a hazard immediately with a random velocity.
    pub fn launch(&mut self, now: Instant) -> Velocity {
        let velocity = Velocity::new(self.random_axis(), self.random_axis());
        self.hazards.push(Hazard {
            cell: self.site,
            velocity,
            occluded: Symbol::EmitterSite,
            last_advance: now,
        });
        self.launched += 1;
        debug!(site = ?self.site, ?velocity, "hazard launched");
        velocity
    }

    /// Steps every hazard whose step interval elapsed, returning the
    /// transitions taken in launch order.
    ///
    /// The lock is taken once per due hazard and held across its whole
    /// decision. Once the run is over the pass stops without touching the
    /// board.
    pub fn advance(&mut self, world: &World, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        let mut index = 0;

        while index < self.hazards.len() {
            let hazard = self.hazards[index];
            if now.saturating_duration_since(hazard.last_advance) < self.config.step_interval {
                index += 1;
                continue;
            }

            let mut board = world.lock();
            if board.is_over() {
                break;
            }

            let transition = classify(board.grid(), board.agent(), &hazard);
            match transition {
                Transition::Retired { at, restored } => {
                    board.write(at, restored);
                    drop(board);
                    let _ = self.hazards.remove(index);
                    debug!(site = ?self.site, cell = ?at, "hazard retired");
                }
                Transition::Struck { wreck } => {
                    board.write(wreck, Symbol::Wreck);
                    let _ = board.finish(Outcome::Defeat);
                    drop(board);
                    let _ = self.hazards.remove(index);
                    debug!(site = ?self.site, cell = ?wreck, "hazard struck the agent");
                }
                Transition::Advanced { from, to } => {
                    board.write(from, hazard.occluded);
                    let covered = board.read(to);
                    board.write(to, Symbol::Hazard);
                    drop(board);

                    let moved = &mut self.hazards[index];
                    moved.cell = to;
                    moved.occluded = covered;
                    moved.last_advance = now;
                    index += 1;
                }
            }
            transitions.push(transition);
        }

        transitions
    }

    fn random_axis(&mut self) -> i8 {
        match self.random.random_int(-1, 1) {
            value if value < 0 => -1,
            0 => 0,
            _ => 1,
        }
    }
}
