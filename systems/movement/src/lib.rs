#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Movement system that resolves agent moves against the shared board.

use galaxy_voyager_core::{CellCoord, Direction, Outcome, Symbol};
use galaxy_voyager_world::{BoardGuard, World};
use tracing::debug;

/// Result of resolving a single direction signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The run had already ended, so the signal was dropped.
    Ignored,
    /// The destination lies outside the grid; the signal was discarded.
    Discarded,
    /// The destination cannot be entered.
    Blocked {
        /// Symbol occupying the destination.
        obstacle: Symbol,
    },
    /// The agent stepped into an empty cell.
    Moved {
        /// Cell the agent left.
        from: CellCoord,
        /// Cell the agent now occupies.
        to: CellCoord,
    },
    /// The agent stepped onto a target and collected it.
    Collected {
        /// Cell the agent left.
        from: CellCoord,
        /// Cell the agent now occupies.
        to: CellCoord,
        /// Score after the collection.
        score: u32,
    },
    /// The agent ran into an emitter site or a hazard and was wrecked in place.
    Destroyed {
        /// Cell that now holds the wreck.
        wreck: CellCoord,
        /// Symbol the agent attempted to enter.
        cause: Symbol,
    },
}

/// Resolves agent moves, one locked read-decide-write sequence per signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct MovementResolver;

impl MovementResolver {
    /// Applies the move to the world while holding the board-mutation lock.
    pub fn resolve(&self, world: &World, direction: Direction) -> MoveOutcome {
        let mut board = world.lock();
        let outcome = apply(&mut board, direction);
        drop(board);

        match outcome {
            MoveOutcome::Collected { score, .. } => debug!(score, "target collected"),
            MoveOutcome::Destroyed { wreck, cause } => {
                debug!(?wreck, ?cause, "agent destroyed");
            }
            _ => {}
        }
        outcome
    }
}

/// Decides and applies one move on an already locked board.
pub fn apply(board: &mut BoardGuard<'_>, direction: Direction) -> MoveOutcome {
    if board.is_over() {
        return MoveOutcome::Ignored;
    }

    let from = board.agent();
    let Some(to) = from
        .step(direction)
        .filter(|cell| board.grid().contains(*cell))
    else {
        return MoveOutcome::Discarded;
    };

    match board.read(to) {
        Symbol::Empty => {
            board.relocate_agent(to);
            MoveOutcome::Moved { from, to }
        }
        Symbol::Target => {
            board.write(to, Symbol::Empty);
            let score = board.collect_target();
            board.relocate_agent(to);
            MoveOutcome::Collected { from, to, score }
        }
        cause @ (Symbol::EmitterSite | Symbol::Hazard) => {
            board.write(from, Symbol::Wreck);
            let _ = board.finish(Outcome::Defeat);
            MoveOutcome::Destroyed { wreck: from, cause }
        }
        obstacle @ (Symbol::Wall | Symbol::Agent | Symbol::Wreck) => {
            MoveOutcome::Blocked { obstacle }
        }
    }
}
