//! The 3×3 board.
//!
//! A fixed array of nine optional symbols, indexed row-major
//! (`row = idx / 3`, `col = idx % 3`). `Board` is a `Copy` value: writes go
//! through [`Board::with`], which returns a new board and leaves the
//! original untouched, so old snapshots stay valid for undo/redo.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The 8 lines that can win: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Immutable 3×3 board value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Symbol>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Create a board from raw cells.
    #[must_use]
    pub const fn from_cells(cells: [Option<Symbol>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the content of a cell. Off-board indices read as empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied().flatten()
    }

    /// Return a copy of this board with one cell replaced.
    ///
    /// Off-board indices return the board unchanged.
    #[must_use]
    pub fn with(mut self, index: usize, symbol: Option<Symbol>) -> Self {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = symbol;
        }
        self
    }

    /// Check if the index names a cell.
    #[inline]
    #[must_use]
    pub const fn contains(index: usize) -> bool {
        index < CELL_COUNT
    }

    /// Map a cell index to `(row, col)`.
    #[must_use]
    pub const fn row_col(index: usize) -> (usize, usize) {
        (index / 3, index % 3)
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Symbol>; CELL_COUNT] {
        &self.cells
    }

    /// Indices of empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Check if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Count cells holding the given symbol.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|&&c| c == Some(symbol)).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let glyph = self.cells[row * 3 + col].map_or('.', Symbol::glyph);
                write!(f, "{glyph}")?;
                if col < 2 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), CELL_COUNT);
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_leaves_original() {
        let board = Board::new();
        let next = board.with(4, Some(Symbol::Vertical));

        assert_eq!(board.get(4), None);
        assert_eq!(next.get(4), Some(Symbol::Vertical));
    }

    #[test]
    fn test_off_board_access() {
        let board = Board::new().with(12, Some(Symbol::Plus));
        assert_eq!(board, Board::new());
        assert_eq!(board.get(9), None);
        assert!(!Board::contains(9));
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Board::row_col(0), (0, 0));
        assert_eq!(Board::row_col(5), (1, 2));
        assert_eq!(Board::row_col(7), (2, 1));
    }

    #[test]
    fn test_full_and_count() {
        let board = Board::from_cells([Some(Symbol::Plus); CELL_COUNT]).with(0, Some(Symbol::Slash));
        assert!(board.is_full());
        assert_eq!(board.count(Symbol::Plus), 8);
        assert_eq!(board.count(Symbol::Slash), 1);
    }

    #[test]
    fn test_display() {
        let board = Board::new()
            .with(0, Some(Symbol::Vertical))
            .with(4, Some(Symbol::Slash))
            .with(8, Some(Symbol::Block));
        assert_eq!(board.to_string(), "| . .\n. / .\n. . O\n");
    }
}
