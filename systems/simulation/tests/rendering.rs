use std::{collections::HashSet, io, thread, time::Duration};

use galaxy_voyager_core::{Canvas, CellCoord, Direction, InputSource, Outcome, RandomSource, Symbol};
use galaxy_voyager_system_hazards::Config as HazardConfig;
use galaxy_voyager_system_simulation::{Config, Display, SimulationLoop};
use galaxy_voyager_world::{Grid, Layout, World};

/// Canvas that checks every flushed frame covers the board exactly once.
struct FrameAuditor {
    cells_per_frame: usize,
    staged: Vec<CellCoord>,
    frames: usize,
    torn_frames: usize,
}

impl FrameAuditor {
    fn new(columns: u32, rows: u32) -> Self {
        Self {
            cells_per_frame: columns as usize * rows as usize,
            staged: Vec::new(),
            frames: 0,
            torn_frames: 0,
        }
    }
}

impl Canvas for FrameAuditor {
    fn paint_cell(&mut self, cell: CellCoord, _symbol: Symbol) {
        self.staged.push(cell);
        thread::yield_now();
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let staged = std::mem::take(&mut self.staged);
        let distinct: HashSet<_> = staged.iter().copied().collect();
        if staged.len() != self.cells_per_frame || distinct.len() != staged.len() {
            self.torn_frames += 1;
        }
        self.frames += 1;
        Ok(())
    }

    fn show_banner(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }
}

struct Idle;

impl InputSource for Idle {
    fn next_direction(&mut self) -> Option<Direction> {
        thread::sleep(Duration::from_millis(1));
        None
    }
}

/// Launches every hazard eastwards.
struct Eastward {
    row_next: bool,
}

impl RandomSource for Eastward {
    fn random_int(&mut self, low: i32, high: i32) -> i32 {
        let value = if self.row_next { 0 } else { 1 };
        self.row_next = !self.row_next;
        value.clamp(low, high)
    }
}

fn world_with(columns: u32, rows: u32, agent: CellCoord, sites: &[CellCoord]) -> World {
    let mut grid = Grid::walled(columns, rows);
    for site in sites {
        grid.write(*site, Symbol::EmitterSite);
    }
    grid.write(CellCoord::new(columns - 2, 1), Symbol::Target);
    grid.write(agent, Symbol::Agent);
    World::new(Layout::new(grid, agent, sites.to_vec()))
}

#[test]
fn concurrent_presents_flush_whole_frames() {
    let world = world_with(9, 7, CellCoord::new(4, 3), &[CellCoord::new(2, 2)]);
    let display = Display::new(FrameAuditor::new(9, 7));

    thread::scope(|scope| {
        for _ in 0..4 {
            let _ = scope.spawn(|| {
                for _ in 0..50 {
                    display.present(&world);
                }
            });
        }
    });

    let auditor = display.into_inner();
    assert_eq!(auditor.frames, 200);
    assert_eq!(auditor.torn_frames, 0, "frames interleaved");
}

#[test]
fn several_emitters_never_tear_frames() {
    let agent = CellCoord::new(3, 2);
    let sites = [
        CellCoord::new(1, 2),
        CellCoord::new(1, 4),
        CellCoord::new(1, 5),
    ];
    let world = world_with(8, 7, agent, &sites);
    let display = Display::new(FrameAuditor::new(8, 7));
    let simulation = SimulationLoop::new(Config::new(
        HazardConfig::new(Duration::from_millis(5), Duration::from_millis(5)),
        Duration::from_millis(1),
    ));

    let report = simulation
        .run(&world, &display, Idle, |_| Eastward { row_next: false })
        .expect("run ends with an outcome");

    assert_eq!(report.outcome, Outcome::Defeat);
    let auditor = display.into_inner();
    assert!(auditor.frames > sites.len(), "every emitter draws frames");
    assert_eq!(auditor.torn_frames, 0, "frames interleaved");
}
