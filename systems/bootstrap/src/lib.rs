#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bootstrap system that seeds the Galaxy Voyager board before any actor runs.

use galaxy_voyager_core::{CellCoord, RandomSource, Symbol};
use galaxy_voyager_world::{ArenaConfig, ConfigError, Grid, Layout};

/// Places the wall ring, targets, emitter sites and the agent.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardSeeder {
    config: ArenaConfig,
}

impl BoardSeeder {
    /// Creates a seeder for the provided arena.
    #[must_use]
    pub const fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    /// Arena this seeder populates.
    #[must_use]
    pub const fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Builds the initial layout.
    ///
    /// Items land on uniformly random empty interior cells, targets first,
    /// then emitter sites, then the agent. The configuration is validated up
    /// front so rejection sampling always has a free cell to find.
    pub fn seed<R>(&self, random: &mut R) -> Result<Layout, ConfigError>
    where
        R: RandomSource + ?Sized,
    {
        self.config.validate()?;

        let mut grid = Grid::walled(self.config.columns(), self.config.rows());
        for _ in 0..self.config.target_count() {
            let _ = place(&mut grid, random, Symbol::Target);
        }

        let emitters = (0..self.config.emitter_count())
            .map(|_| place(&mut grid, random, Symbol::EmitterSite))
            .collect();

        let agent = place(&mut grid, random, Symbol::Agent);

        Ok(Layout::new(grid, agent, emitters))
    }
}

fn place<R>(grid: &mut Grid, random: &mut R, symbol: Symbol) -> CellCoord
where
    R: RandomSource + ?Sized,
{
    loop {
        let cell = CellCoord::new(
            pick(random, 1, grid.columns() - 2),
            pick(random, 1, grid.rows() - 2),
        );
        if grid.read(cell) == Symbol::Empty {
            grid.write(cell, symbol);
            return cell;
        }
    }
}

fn pick<R>(random: &mut R, low: u32, high: u32) -> u32
where
    R: RandomSource + ?Sized,
{
    let low_i32 = i32::try_from(low).unwrap_or(i32::MAX);
    let high_i32 = i32::try_from(high).unwrap_or(i32::MAX);
    let value = random.random_int(low_i32, high_i32);
    u32::try_from(value).map_or(low, |value| value.clamp(low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(i32);

    impl RandomSource for Fixed {
        fn random_int(&mut self, low: i32, high: i32) -> i32 {
            self.0.clamp(low, high)
        }
    }

    #[test]
    fn pick_clamps_out_of_range_values() {
        assert_eq!(pick(&mut Fixed(-7), 1, 5), 1);
        assert_eq!(pick(&mut Fixed(99), 1, 5), 5);
        assert_eq!(pick(&mut Fixed(3), 1, 5), 3);
    }
}
