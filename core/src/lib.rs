#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Galaxy Voyager engine.
//!
//! This crate defines the vocabulary that connects the shared board, the
//! concurrent actors that mutate it, and the adapters that draw it. Cells
//! hold a single [`Symbol`], positions are [`CellCoord`] values, and the
//! outside world is reached through three narrow collaborator traits:
//! [`RandomSource`], [`InputSource`] and [`Canvas`].

use std::{io, time::Duration};

use serde::{Deserialize, Serialize};

/// Title shown in the banner beneath the board while the game runs.
pub const GAME_TITLE: &str = "Galaxy voyager";

/// Banner shown when every target has been collected.
pub const VICTORY_BANNER: &str = "YOU WIN!";

/// Banner shown after any fatal collision.
pub const DEFEAT_BANNER: &str = "DEFEAT!";

/// Number of cell columns on the board, boundary ring included.
pub const BOARD_COLUMNS: u32 = 40;

/// Number of cell rows on the board, boundary ring included.
pub const BOARD_ROWS: u32 = 20;

/// Number of targets seeded onto the board.
pub const TARGET_COUNT: u32 = 10;

/// Number of emitter sites seeded onto the board.
pub const EMITTER_COUNT: u32 = 4;

/// Time between two hazard launches from the same emitter.
pub const SPAWN_INTERVAL: Duration = Duration::from_secs(5);

/// Minimum time a hazard waits between two steps.
pub const HAZARD_STEP_INTERVAL: Duration = Duration::from_millis(500);

/// Pause an emitter actor takes after each pass to keep the frame rate smooth.
pub const FRAME_PAUSE: Duration = Duration::from_millis(20);

/// Content of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Impassable boundary cell.
    Wall,
    /// Free cell.
    Empty,
    /// Collectible item.
    Target,
    /// Fixed location that launches hazards.
    EmitterSite,
    /// Moving obstacle launched by an emitter.
    Hazard,
    /// Player-controlled entity.
    Agent,
    /// Remains of the agent after a fatal collision.
    Wreck,
}

impl Symbol {
    /// Character used to draw the symbol on a text terminal.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Empty => ' ',
            Self::Target => '.',
            Self::EmitterSite => 'O',
            Self::Hazard => '*',
            Self::Agent => '^',
            Self::Wreck => 'X',
        }
    }
}

/// Cardinal movement directions available to the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// All directions in clockwise order starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step associated with the direction.
    #[must_use]
    pub const fn velocity(self) -> Velocity {
        match self {
            Self::North => Velocity::new(0, -1),
            Self::East => Velocity::new(1, 0),
            Self::South => Velocity::new(0, 1),
            Self::West => Velocity::new(-1, 0),
        }
    }
}

/// Per-step displacement with each axis in `-1..=1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Velocity {
    column: i8,
    row: i8,
}

impl Velocity {
    /// Creates a new velocity from column and row components.
    #[must_use]
    pub const fn new(column: i8, row: i8) -> Self {
        Self { column, row }
    }

    /// Displacement applied to the column index on each step.
    #[must_use]
    pub const fn column(&self) -> i8 {
        self.column
    }

    /// Displacement applied to the row index on each step.
    #[must_use]
    pub const fn row(&self) -> i8 {
        self.row
    }

    /// Reports whether the velocity leaves its owner in place.
    #[must_use]
    pub const fn is_stationary(&self) -> bool {
        self.column == 0 && self.row == 0
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Applies the velocity, returning `None` when the result would leave the
    /// non-negative quadrant.
    #[must_use]
    pub fn offset(self, velocity: Velocity) -> Option<CellCoord> {
        let column = self.column.checked_add_signed(velocity.column().into())?;
        let row = self.row.checked_add_signed(velocity.row().into())?;
        Some(CellCoord::new(column, row))
    }

    /// Cell reached by taking one step in the provided direction.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<CellCoord> {
        self.offset(direction.velocity())
    }
}

/// Terminal result of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every target was collected.
    Victory,
    /// The agent collided with a hazard or an emitter site.
    Defeat,
}

impl Outcome {
    /// Literal message announcing the outcome.
    #[must_use]
    pub const fn banner(self) -> &'static str {
        match self {
            Self::Victory => VICTORY_BANNER,
            Self::Defeat => DEFEAT_BANNER,
        }
    }
}

/// Supplies uniformly distributed integers.
pub trait RandomSource: Send {
    /// Returns an integer in `low..=high`.
    fn random_int(&mut self, low: i32, high: i32) -> i32;
}

/// Supplies the agent's direction signals.
///
/// Implementations may block, but must return `None` periodically so the
/// caller can observe the end of the run without waiting for a key press.
pub trait InputSource: Send {
    /// Waits for the next direction signal. Any non-direction key yields `None`.
    fn next_direction(&mut self) -> Option<Direction>;
}

/// Drawing surface for board frames and the outcome banner.
///
/// Callers serialize access; implementations need no locking of their own.
pub trait Canvas: Send {
    /// Stages the symbol for the provided cell in the next frame.
    fn paint_cell(&mut self, cell: CellCoord, symbol: Symbol);

    /// Flushes every staged cell to the output.
    fn render_frame(&mut self) -> io::Result<()>;

    /// Displays a message in the banner area.
    fn show_banner(&mut self, message: &str) -> io::Result<()>;
}
