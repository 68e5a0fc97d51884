//! Render lock shared by every actor.

use galaxy_voyager_core::{Canvas, Outcome};
use galaxy_voyager_world::{query, World};
use parking_lot::Mutex;
use tracing::warn;

/// Serializes access to a [`Canvas`] so frames from different actors never
/// interleave.
///
/// The lock here is distinct from the board-mutation lock: the board is
/// copied under the mutation lock, which is released before this one is
/// taken.
#[derive(Debug)]
pub struct Display<C> {
    canvas: Mutex<C>,
}

impl<C> Display<C>
where
    C: Canvas,
{
    /// Wraps the canvas in the render lock.
    #[must_use]
    pub fn new(canvas: C) -> Self {
        Self {
            canvas: Mutex::new(canvas),
        }
    }

    /// Draws the full board as it stands now.
    ///
    /// A failed frame is logged and skipped; the next one redraws every cell.
    pub fn present(&self, world: &World) {
        let grid = query::snapshot(world);
        let mut canvas = self.canvas.lock();
        for (cell, symbol) in grid.iter() {
            canvas.paint_cell(cell, symbol);
        }
        if let Err(error) = canvas.render_frame() {
            warn!(%error, "failed to render frame");
        }
    }

    /// Shows the outcome banner.
    pub fn announce(&self, outcome: Outcome) {
        if let Err(error) = self.canvas.lock().show_banner(outcome.banner()) {
            warn!(%error, ?outcome, "failed to show outcome banner");
        }
    }

    /// Releases the canvas once no actor needs it anymore.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.canvas.into_inner()
    }
}
