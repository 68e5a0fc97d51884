#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Crossterm-backed terminal adapter for Galaxy Voyager.
//!
//! Provides the screen lifecycle, a [`TerminalCanvas`] implementing the core
//! drawing contract and a [`Keyboard`] implementing the input contract.

mod banner;
mod canvas;
mod keyboard;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::error;

pub use canvas::TerminalCanvas;
pub use keyboard::{wait_for_quit, Keyboard};

/// Raw-mode alternate screen that is restored when dropped.
#[derive(Debug)]
pub struct Screen {
    _restore_on_drop: (),
}

impl Screen {
    /// Switches the terminal to raw mode on the alternate screen.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let screen = Self {
            _restore_on_drop: (),
        };
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All)
        )
        .context("failed to enter alternate screen")?;
        Ok(screen)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        restore();
    }
}

pub(crate) fn restore() {
    if let Err(err) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
        error!(?err, "failed to leave alternate screen");
    }
    if let Err(err) = disable_raw_mode() {
        error!(?err, "failed to disable raw mode");
    }
}
