//! Arena dimensions and population counts.

use galaxy_voyager_core::{BOARD_COLUMNS, BOARD_ROWS, EMITTER_COUNT, TARGET_COUNT};
use thiserror::Error;

/// Size of the board and the number of items seeded onto it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    columns: u32,
    rows: u32,
    target_count: u32,
    emitter_count: u32,
}

impl ArenaConfig {
    /// Creates a new arena configuration.
    #[must_use]
    pub const fn new(columns: u32, rows: u32, target_count: u32, emitter_count: u32) -> Self {
        Self {
            columns,
            rows,
            target_count,
            emitter_count,
        }
    }

    /// Number of columns including the boundary ring.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows including the boundary ring.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of targets to seed.
    #[must_use]
    pub const fn target_count(&self) -> u32 {
        self.target_count
    }

    /// Number of emitter sites to seed.
    #[must_use]
    pub const fn emitter_count(&self) -> u32 {
        self.emitter_count
    }

    /// Number of cells inside the boundary ring.
    #[must_use]
    pub fn interior_capacity(&self) -> u64 {
        u64::from(self.columns.saturating_sub(2)) * u64::from(self.rows.saturating_sub(2))
    }

    /// Rejects configurations that seeding could never satisfy.
    ///
    /// Seeding places every target, every emitter site and the agent on a
    /// distinct interior cell by rejection sampling, which would spin forever
    /// on an overfull board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let available = self.interior_capacity();
        if available == 0 {
            return Err(ConfigError::NoInterior {
                columns: self.columns,
                rows: self.rows,
            });
        }

        let requested = u64::from(self.target_count) + u64::from(self.emitter_count) + 1;
        if requested > available {
            return Err(ConfigError::Overcrowded {
                requested,
                available,
            });
        }

        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(BOARD_COLUMNS, BOARD_ROWS, TARGET_COUNT, EMITTER_COUNT)
    }
}

/// Reasons an arena configuration is rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The board is too small to have any cell inside the wall ring.
    #[error("a {columns}x{rows} board has no cells inside its wall ring")]
    NoInterior {
        /// Configured column count.
        columns: u32,
        /// Configured row count.
        rows: u32,
    },
    /// More items were requested than there are interior cells.
    #[error("{requested} items requested but only {available} interior cells exist")]
    Overcrowded {
        /// Targets plus emitter sites plus the agent.
        requested: u64,
        /// Cells inside the wall ring.
        available: u64,
    },
}
