//! Dense symbol grid backing the shared board.

use galaxy_voyager_core::{CellCoord, Symbol};

/// Fixed-size board of symbols stored in row-major order.
///
/// The grid never resizes after construction. Reads and writes expect
/// in-range coordinates; an out-of-range access indicates a defect in the
/// caller's coordinate arithmetic and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cells: Vec<Symbol>,
}

impl Grid {
    /// Creates a grid whose every cell is empty.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            cells: vec![Symbol::Empty; capacity],
        }
    }

    /// Creates an empty grid surrounded by the boundary wall ring.
    #[must_use]
    pub fn walled(columns: u32, rows: u32) -> Self {
        let mut grid = Self::new(columns, rows);
        for row in 0..rows {
            for column in 0..columns {
                let cell = CellCoord::new(column, row);
                if grid.is_boundary(cell) {
                    grid.write(cell, Symbol::Wall);
                }
            }
        }
        grid
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the cell lies within the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Reports whether the cell belongs to the outermost ring.
    #[must_use]
    pub const fn is_boundary(&self, cell: CellCoord) -> bool {
        cell.column() == 0
            || cell.row() == 0
            || cell.column() + 1 == self.columns
            || cell.row() + 1 == self.rows
    }

    /// Symbol currently stored in the cell.
    #[must_use]
    pub fn read(&self, cell: CellCoord) -> Symbol {
        self.cells[self.index(cell)]
    }

    /// Replaces the symbol stored in the cell.
    pub fn write(&mut self, cell: CellCoord, symbol: Symbol) {
        let index = self.index(cell);
        self.cells[index] = symbol;
    }

    /// Counts the cells currently holding the symbol.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|stored| **stored == symbol)
            .count()
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, Symbol)> + '_ {
        let columns = self.columns.max(1);
        self.cells.iter().enumerate().map(move |(index, symbol)| {
            let index = index as u32;
            (CellCoord::new(index % columns, index / columns), *symbol)
        })
    }

    fn index(&self, cell: CellCoord) -> usize {
        assert!(
            self.contains(cell),
            "cell {cell:?} outside {}x{} grid",
            self.columns,
            self.rows
        );
        cell.row() as usize * self.columns as usize + cell.column() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walled_grid_has_boundary_ring_only() {
        let grid = Grid::walled(5, 4);
        for (cell, symbol) in grid.iter() {
            if grid.is_boundary(cell) {
                assert_eq!(symbol, Symbol::Wall, "{cell:?} should be wall");
            } else {
                assert_eq!(symbol, Symbol::Empty, "{cell:?} should be empty");
            }
        }
        assert_eq!(grid.count(Symbol::Wall), 5 * 4 - 3 * 2);
    }

    #[test]
    fn write_then_read_targets_single_cell() {
        let mut grid = Grid::new(4, 4);
        grid.write(CellCoord::new(2, 1), Symbol::Target);
        assert_eq!(grid.read(CellCoord::new(2, 1)), Symbol::Target);
        assert_eq!(grid.count(Symbol::Target), 1);
    }

    #[test]
    fn iter_reports_row_major_coordinates() {
        let grid = Grid::new(3, 2);
        let cells: Vec<_> = grid.iter().map(|(cell, _)| cell).collect();
        assert_eq!(cells[0], CellCoord::new(0, 0));
        assert_eq!(cells[2], CellCoord::new(2, 0));
        assert_eq!(cells[3], CellCoord::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_read_is_fatal() {
        let grid = Grid::new(3, 3);
        let _ = grid.read(CellCoord::new(3, 0));
    }
}
