#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative board state shared by the Galaxy Voyager actors.
//!
//! The [`World`] owns the symbol grid, the agent position and the outcome
//! behind a single mutation lock. Actors acquire a [`BoardGuard`] for one
//! logical step, read and write cells through it, and release it before
//! rendering. The `over` flag and the score are mirrored in atomics so every
//! actor's loop condition can poll them without contending for the lock;
//! both are only ever written while the lock is held.

mod config;
mod grid;

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use galaxy_voyager_core::{CellCoord, Outcome, Symbol};
use parking_lot::{Mutex, MutexGuard};

pub use config::{ArenaConfig, ConfigError};
pub use grid::Grid;

/// Initial board produced by seeding, before any actor runs.
#[derive(Clone, Debug)]
pub struct Layout {
    grid: Grid,
    agent: CellCoord,
    emitters: Vec<CellCoord>,
}

impl Layout {
    /// Bundles a fully populated grid with the positions seeding chose.
    ///
    /// The agent cell must already hold [`Symbol::Agent`] and every emitter
    /// cell [`Symbol::EmitterSite`].
    #[must_use]
    pub fn new(grid: Grid, agent: CellCoord, emitters: Vec<CellCoord>) -> Self {
        debug_assert_eq!(grid.read(agent), Symbol::Agent);
        debug_assert!(emitters
            .iter()
            .all(|site| grid.read(*site) == Symbol::EmitterSite));
        Self {
            grid,
            agent,
            emitters,
        }
    }

    /// Seeded grid contents.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Starting cell of the agent.
    #[must_use]
    pub const fn agent(&self) -> CellCoord {
        self.agent
    }

    /// Cells of the emitter sites in placement order.
    #[must_use]
    pub fn emitters(&self) -> &[CellCoord] {
        &self.emitters
    }
}

#[derive(Debug)]
struct Board {
    grid: Grid,
    agent: CellCoord,
    outcome: Option<Outcome>,
}

/// Represents the authoritative Galaxy Voyager world state.
#[derive(Debug)]
pub struct World {
    board: Mutex<Board>,
    over: AtomicBool,
    score: AtomicU32,
    target_count: u32,
    emitters: Vec<CellCoord>,
}

impl World {
    /// Creates a world from a seeded layout. The target count is the number
    /// of targets present on the seeded grid.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let target_count = u32::try_from(layout.grid.count(Symbol::Target)).unwrap_or(u32::MAX);
        Self {
            board: Mutex::new(Board {
                grid: layout.grid,
                agent: layout.agent,
                outcome: None,
            }),
            over: AtomicBool::new(false),
            score: AtomicU32::new(0),
            target_count,
            emitters: layout.emitters,
        }
    }

    /// Acquires the board-mutation lock for one logical step.
    pub fn lock(&self) -> BoardGuard<'_> {
        BoardGuard {
            board: self.board.lock(),
            world: self,
        }
    }

    /// Stops every actor without recording an outcome.
    ///
    /// Used when an actor dies, so the remaining ones shut down instead of
    /// waiting for a win or loss that may never come.
    pub fn halt(&self) {
        let _board = self.board.lock();
        self.over.store(true, Ordering::Release);
    }
}

/// Exclusive access to the board for the duration of one logical step.
///
/// Every read-decide-write sequence touching cells, the score or the outcome
/// happens through a single guard; dropping it releases the lock.
#[derive(Debug)]
pub struct BoardGuard<'world> {
    board: MutexGuard<'world, Board>,
    world: &'world World,
}

impl BoardGuard<'_> {
    /// Read-only access to the locked grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.board.grid
    }

    /// Symbol currently stored in the cell.
    #[must_use]
    pub fn read(&self, cell: CellCoord) -> Symbol {
        self.board.grid.read(cell)
    }

    /// Replaces the symbol stored in the cell.
    pub fn write(&mut self, cell: CellCoord, symbol: Symbol) {
        self.board.grid.write(cell, symbol);
    }

    /// Current cell of the agent.
    #[must_use]
    pub fn agent(&self) -> CellCoord {
        self.board.agent
    }

    /// Moves the agent symbol to `destination`, leaving its previous cell empty.
    pub fn relocate_agent(&mut self, destination: CellCoord) {
        let origin = self.board.agent;
        self.board.grid.write(origin, Symbol::Empty);
        self.board.grid.write(destination, Symbol::Agent);
        self.board.agent = destination;
    }

    /// Reports whether the run already ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.world.over.load(Ordering::Acquire)
    }

    /// Score reached so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.world.score.load(Ordering::Acquire)
    }

    /// Records one collected target and returns the new score.
    ///
    /// Collecting the final target ends the run with [`Outcome::Victory`].
    pub fn collect_target(&mut self) -> u32 {
        let score = self.score() + 1;
        debug_assert!(score <= self.world.target_count, "score exceeds targets");
        self.world.score.store(score, Ordering::Release);
        if score == self.world.target_count {
            let _ = self.finish(Outcome::Victory);
        }
        score
    }

    /// Ends the run with the provided outcome.
    ///
    /// Returns `false` without changing anything when the run had already
    /// ended; the first recorded outcome is final.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if self.is_over() {
            return false;
        }
        self.board.outcome = Some(outcome);
        self.world.over.store(true, Ordering::Release);
        true
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::sync::atomic::Ordering;

    use super::{Grid, World};
    use galaxy_voyager_core::{CellCoord, Outcome};

    /// Reports whether the run has ended. Does not take the mutation lock.
    #[must_use]
    pub fn is_over(world: &World) -> bool {
        world.over.load(Ordering::Acquire)
    }

    /// Number of targets collected so far. Does not take the mutation lock.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score.load(Ordering::Acquire)
    }

    /// Total number of targets seeded onto the board.
    #[must_use]
    pub fn target_count(world: &World) -> u32 {
        world.target_count
    }

    /// Cells of the emitter sites in placement order.
    #[must_use]
    pub fn emitters(world: &World) -> &[CellCoord] {
        &world.emitters
    }

    /// Outcome of the run, once it has ended.
    #[must_use]
    pub fn outcome(world: &World) -> Option<Outcome> {
        world.board.lock().outcome
    }

    /// Current agent cell.
    #[must_use]
    pub fn agent(world: &World) -> CellCoord {
        world.board.lock().agent
    }

    /// Copies the grid under the mutation lock so it can be drawn after release.
    #[must_use]
    pub fn snapshot(world: &World) -> Grid {
        world.board.lock().grid.clone()
    }
}
