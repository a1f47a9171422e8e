//! The N×N cell matrix.

use super::types::{Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest accepted board size.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest accepted board size.
pub const MAX_BOARD_SIZE: usize = 20;

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Square SOS grid.
///
/// Reads are bounds-safe: any coordinate outside the grid reads as
/// [`Symbol::Empty`], which keeps neighbour probing at the edges simple.
/// Writes are unchecked; legality is decided by the placement contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Symbol>,
}

impl Grid {
    /// Creates an empty grid, clamping `size` into
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Self {
        let size = size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Symbol::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the coordinate lies on the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Reads the cell at (`row`, `col`), or [`Symbol::Empty`] when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Symbol {
        if self.contains(row, col) {
            self.cells[row * self.size + col]
        } else {
            Symbol::Empty
        }
    }

    /// Reads the cell at `pos`, or [`Symbol::Empty`] when out of bounds.
    pub fn at(&self, pos: Position) -> Symbol {
        self.get(pos.row, pos.col)
    }

    /// Writes a symbol. Out-of-bounds writes are ignored.
    pub(crate) fn set(&mut self, row: usize, col: usize, symbol: Symbol) {
        if self.contains(row, col) {
            self.cells[row * self.size + col] = symbol;
        }
    }

    /// Returns true if the cell is on the grid and holds no symbol.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.contains(pos.row, pos.col) && self.at(pos).is_empty()
    }

    /// Number of cells holding a symbol.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|s| !s.is_empty()).count()
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| !s.is_empty())
    }

    /// All empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(idx, _)| Position::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.cells.chunks(self.size)
    }

    /// Formats the grid as a human-readable string.
    ///
    /// Empty cells show as `.`; rows and columns are labelled from 0.
    pub fn display(&self) -> String {
        let width = (self.size - 1).to_string().len();
        let mut result = format!("{:>width$} ", "");
        for col in 0..self.size {
            result.push_str(&format!(" {col:>width$}"));
        }
        result.push('\n');
        for (row, cells) in self.rows().enumerate() {
            result.push_str(&format!("{row:>width$} "));
            for symbol in cells {
                result.push_str(&format!(" {:>width$}", symbol.to_string()));
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
