#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Galaxy Voyager in the terminal.

mod random;
mod summary;

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use galaxy_voyager_core::GAME_TITLE;
use galaxy_voyager_system_bootstrap::BoardSeeder;
use galaxy_voyager_system_simulation::{Display, RunReport, SimulationError, SimulationLoop};
use galaxy_voyager_terminal::{wait_for_quit, Keyboard, Screen, TerminalCanvas};
use galaxy_voyager_world::World;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{random::ChaChaRandom, summary::RunSummary};

/// Stream reserved for the board seeder; emitter `i` reads stream `i + 1`.
const BOARD_STREAM: u64 = 0;

/// Command-line arguments accepted by the Galaxy Voyager binary.
#[derive(Debug, Parser)]
#[command(
    name = "galaxy-voyager",
    about = "Collect every target before a hazard finds you"
)]
struct Cli {
    /// Seed for the board layout and hazard headings.
    #[arg(long)]
    seed: Option<u64>,
    /// File receiving tracing output; logging is disabled without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Print a TOML summary of the run after the terminal is restored.
    #[arg(long)]
    summary: bool,
}

/// Entry point for the Galaxy Voyager command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding board");

    let seeder = BoardSeeder::default();
    let layout = seeder
        .seed(&mut ChaChaRandom::seeded(seed, BOARD_STREAM))
        .context("failed to seed the board")?;
    let world = World::new(layout);

    let report = play(&world, &seeder, seed)?;

    if cli.summary {
        let summary = RunSummary::from(&report)
            .to_toml()
            .context("failed to serialise the run summary")?;
        print!("{summary}");
    }
    Ok(())
}

fn play(world: &World, seeder: &BoardSeeder, seed: u64) -> Result<RunReport> {
    let _screen = Screen::enter()?;

    let arena = seeder.config();
    let mut canvas = TerminalCanvas::stdout(arena.columns(), arena.rows());
    canvas
        .draw_banner_frame(GAME_TITLE)
        .context("failed to draw the banner")?;
    let display = Display::new(canvas);

    let simulation = SimulationLoop::default();
    let result = simulation.run(world, &display, Keyboard::default(), |index| {
        ChaChaRandom::seeded(seed, BOARD_STREAM + 1 + index as u64)
    });
    let report = finished(result)?;

    wait_for_quit().context("failed to read the quit key")?;
    Ok(report)
}

fn finished(result: Result<RunReport, SimulationError>) -> Result<RunReport> {
    result.context("simulation failed")
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow!(error))
        .context("failed to install the tracing subscriber")
}
