//! Canvas that draws the board as text through crossterm commands.

use std::io::{self, Stdout, Write};

use crossterm::{cursor::MoveTo, queue, style::Print};
use galaxy_voyager_core::{Canvas, CellCoord, Symbol};

use crate::banner::{frame_lines, message_line, BANNER_TEXT_OFFSET};

/// Board-sized character buffer flushed to a terminal writer.
#[derive(Debug)]
pub struct TerminalCanvas<W = Stdout> {
    out: W,
    columns: u32,
    rows: u32,
    glyphs: Vec<char>,
}

impl TerminalCanvas<Stdout> {
    /// Creates a canvas drawing to standard output.
    #[must_use]
    pub fn stdout(columns: u32, rows: u32) -> Self {
        Self::new(io::stdout(), columns, rows)
    }
}

impl<W> TerminalCanvas<W>
where
    W: Write,
{
    /// Creates a canvas for a board of the given size.
    #[must_use]
    pub fn new(out: W, columns: u32, rows: u32) -> Self {
        let capacity = columns as usize * rows as usize;
        Self {
            out,
            columns,
            rows,
            glyphs: vec![Symbol::Empty.glyph(); capacity],
        }
    }

    /// Draws the banner frame beneath the board with the title centred in it.
    pub fn draw_banner_frame(&mut self, title: &str) -> io::Result<()> {
        let top = self.rows.saturating_sub(1);
        for (offset, line) in (0u32..).zip(frame_lines(self.columns, title)) {
            queue!(self.out, MoveTo(0, screen_coord(top + offset)), Print(line))?;
        }
        self.out.flush()
    }

    /// Releases the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> Canvas for TerminalCanvas<W>
where
    W: Write + Send,
{
    fn paint_cell(&mut self, cell: CellCoord, symbol: Symbol) {
        if cell.column() < self.columns && cell.row() < self.rows {
            let index = cell.row() as usize * self.columns as usize + cell.column() as usize;
            self.glyphs[index] = symbol.glyph();
        }
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let width = self.columns.max(1) as usize;
        for (row, glyphs) in (0u32..).zip(self.glyphs.chunks(width)) {
            let line: String = glyphs.iter().collect();
            queue!(self.out, MoveTo(0, screen_coord(row)), Print(line))?;
        }
        self.out.flush()
    }

    fn show_banner(&mut self, message: &str) -> io::Result<()> {
        let row = self.rows.saturating_sub(1) + BANNER_TEXT_OFFSET;
        queue!(
            self.out,
            MoveTo(1, screen_coord(row)),
            Print(message_line(self.columns, message))
        )?;
        self.out.flush()
    }
}

fn screen_coord(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
