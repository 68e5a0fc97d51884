//! Arrow-key input source.

use std::{io, thread, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use galaxy_voyager_core::{Direction, InputSource};
use tracing::warn;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Reads arrow keys from the terminal, giving up after a short poll so the
/// caller can check whether the run ended.
#[derive(Clone, Copy, Debug)]
pub struct Keyboard {
    poll_interval: Duration,
}

impl Keyboard {
    /// Creates a keyboard source that waits at most `poll_interval` per call.
    #[must_use]
    pub const fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new(POLL_INTERVAL)
    }
}

impl InputSource for Keyboard {
    fn next_direction(&mut self) -> Option<Direction> {
        match read_key(self.poll_interval) {
            Ok(Some(key)) if is_interrupt(&key) => {
                crate::restore();
                std::process::exit(130);
            }
            Ok(Some(key)) => direction_for(&key),
            Ok(None) => None,
            Err(error) => {
                warn!(%error, "failed to read terminal input");
                thread::sleep(self.poll_interval);
                None
            }
        }
    }
}

/// Blocks until `q` (or Ctrl-C) is pressed.
pub fn wait_for_quit() -> io::Result<()> {
    loop {
        if let Some(key) = read_key(POLL_INTERVAL)? {
            if key.code == KeyCode::Char('q') || is_interrupt(&key) {
                return Ok(());
            }
        }
    }
}

/// Maps arrow keys onto directions; every other key yields `None`.
#[must_use]
pub(crate) fn direction_for(key: &KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Up => Some(Direction::North),
        KeyCode::Down => Some(Direction::South),
        KeyCode::Left => Some(Direction::West),
        KeyCode::Right => Some(Direction::East),
        _ => None,
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn read_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}
