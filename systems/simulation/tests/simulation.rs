use std::{collections::VecDeque, io, thread, time::Duration};

use galaxy_voyager_core::{Canvas, CellCoord, Direction, InputSource, Outcome, RandomSource, Symbol};
use galaxy_voyager_system_hazards::Config as HazardConfig;
use galaxy_voyager_system_simulation::{Config, Display, SimulationError, SimulationLoop};
use galaxy_voyager_world::{query, Grid, Layout, World};

/// Canvas that keeps the most recent frame in memory.
#[derive(Default)]
struct Recorder {
    staged: Vec<(CellCoord, Symbol)>,
    last_frame: Vec<(CellCoord, Symbol)>,
    frames: usize,
    banner: Option<String>,
}

impl Canvas for Recorder {
    fn paint_cell(&mut self, cell: CellCoord, symbol: Symbol) {
        self.staged.push((cell, symbol));
    }

    fn render_frame(&mut self) -> io::Result<()> {
        self.last_frame = std::mem::take(&mut self.staged);
        self.frames += 1;
        Ok(())
    }

    fn show_banner(&mut self, message: &str) -> io::Result<()> {
        self.banner = Some(message.to_owned());
        Ok(())
    }
}

/// Replays queued moves, then reports "no key" after a short poll.
struct ScriptedInput(VecDeque<Direction>);

impl InputSource for ScriptedInput {
    fn next_direction(&mut self) -> Option<Direction> {
        let next = self.0.pop_front();
        if next.is_none() {
            thread::sleep(Duration::from_millis(1));
        }
        next
    }
}

struct PanickingInput;

impl InputSource for PanickingInput {
    fn next_direction(&mut self) -> Option<Direction> {
        panic!("keyboard unplugged");
    }
}

/// Always launches hazards with the same velocity.
struct Heading {
    column: i32,
    row: i32,
    row_next: bool,
}

impl Heading {
    fn new(column: i32, row: i32) -> Self {
        Self {
            column,
            row,
            row_next: false,
        }
    }
}

impl RandomSource for Heading {
    fn random_int(&mut self, low: i32, high: i32) -> i32 {
        let value = if self.row_next { self.row } else { self.column };
        self.row_next = !self.row_next;
        value.clamp(low, high)
    }
}

fn fast_loop() -> SimulationLoop {
    SimulationLoop::new(Config::new(
        HazardConfig::new(Duration::from_millis(10), Duration::from_millis(10)),
        Duration::from_millis(1),
    ))
}

fn world_with(
    columns: u32,
    rows: u32,
    agent: CellCoord,
    sites: &[CellCoord],
    targets: &[CellCoord],
) -> World {
    let mut grid = Grid::walled(columns, rows);
    for site in sites {
        grid.write(*site, Symbol::EmitterSite);
    }
    for target in targets {
        grid.write(*target, Symbol::Target);
    }
    grid.write(agent, Symbol::Agent);
    World::new(Layout::new(grid, agent, sites.to_vec()))
}

#[test]
fn collecting_single_target_reports_victory() {
    let world = world_with(5, 5, CellCoord::new(1, 2), &[], &[CellCoord::new(2, 2)]);
    let display = Display::new(Recorder::default());

    let report = fast_loop()
        .run(
            &world,
            &display,
            ScriptedInput(VecDeque::from(vec![Direction::East])),
            |_| Heading::new(0, 0),
        )
        .expect("run ends with an outcome");

    assert_eq!(report.outcome, Outcome::Victory);
    assert_eq!(report.score, 1);
    assert_eq!(report.target_count, 1);
    assert_eq!(report.hazards_launched, 0);

    let recorder = display.into_inner();
    assert_eq!(recorder.banner.as_deref(), Some("YOU WIN!"));
    assert!(recorder.frames >= 2, "initial frame plus one per move");
    assert!(recorder
        .last_frame
        .contains(&(CellCoord::new(2, 2), Symbol::Agent)));
}

#[test]
fn hazard_hitting_idle_agent_reports_defeat() {
    let site = CellCoord::new(1, 2);
    let agent = CellCoord::new(3, 2);
    let world = world_with(7, 5, agent, &[site], &[CellCoord::new(5, 1)]);
    let display = Display::new(Recorder::default());

    let report = fast_loop()
        .run(
            &world,
            &display,
            ScriptedInput(VecDeque::new()),
            |_| Heading::new(1, 0),
        )
        .expect("run ends with an outcome");

    assert_eq!(report.outcome, Outcome::Defeat);
    assert_eq!(report.score, 0);
    assert!(report.hazards_launched >= 1);
    assert_eq!(query::snapshot(&world).read(agent), Symbol::Wreck);

    let recorder = display.into_inner();
    assert_eq!(recorder.banner.as_deref(), Some("DEFEAT!"));
}

#[test]
fn agent_collision_with_site_stops_every_emitter() {
    let agent = CellCoord::new(2, 2);
    let world = world_with(
        8,
        6,
        agent,
        &[CellCoord::new(3, 2), CellCoord::new(5, 4)],
        &[CellCoord::new(6, 1)],
    );
    let display = Display::new(Recorder::default());

    let report = fast_loop()
        .run(
            &world,
            &display,
            ScriptedInput(VecDeque::from(vec![Direction::East])),
            |_| Heading::new(0, 0),
        )
        .expect("run ends with an outcome");

    assert_eq!(report.outcome, Outcome::Defeat);
    assert_eq!(query::outcome(&world), Some(Outcome::Defeat));
    assert_eq!(query::snapshot(&world).read(agent), Symbol::Wreck);
}

#[test]
fn panicking_actor_halts_the_run() {
    let world = world_with(
        6,
        6,
        CellCoord::new(1, 1),
        &[CellCoord::new(3, 3)],
        &[CellCoord::new(4, 4)],
    );
    let display = Display::new(Recorder::default());

    let error = fast_loop()
        .run(&world, &display, PanickingInput, |_| Heading::new(0, 0))
        .expect_err("agent actor panicked");

    assert_eq!(
        error,
        SimulationError::ActorPanicked {
            actor: "agent".to_owned()
        }
    );
    assert!(query::is_over(&world));
    assert_eq!(query::outcome(&world), None);
    assert_eq!(display.into_inner().banner, None);
}
