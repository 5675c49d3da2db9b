//! The 6x7 gravity board: pure data and pure functions, no locking.

use crate::common::{BoardError, Cell, Mark};
use crate::config::{COLS, CONNECT, ROWS};
use core::fmt;

/// A fixed 6x7 grid of cell ownership. Chips enter via
/// [`Board::drop_chip`] only, so every column's filled cells form a contiguous run anchored at
/// the bottom; nothing ever validates that after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Cell at (row, col). Row 0 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column is full once its topmost cell is taken.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a chip into `col`: it lands in the lowest (highest-index)
    /// empty cell. Returns the row it came to rest in.
    pub fn drop_chip(&mut self, col: usize, mark: Mark) -> Result<usize, BoardError> {
        if col >= COLS {
            return Err(BoardError::OutOfBounds);
        }
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::Filled(mark);
                return Ok(row);
            }
        }
        Err(BoardError::ColumnFull)
    }

    /// True iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Scan every possible 4-window for four same-mark chips: horizontal,
    /// vertical and both diagonals. Deliberately a full-board rescan
    /// rather than a check around the latest chip, matching the reference
    /// server; the board is small enough not to care.
    pub fn four_in_a_row(&self) -> Option<Mark> {
        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - CONNECT {
                if let Some(mark) = self.line_at(row, col, 0, 1) {
                    return Some(mark);
                }
            }
        }

        // Vertical
        for row in 0..=ROWS - CONNECT {
            for col in 0..COLS {
                if let Some(mark) = self.line_at(row, col, 1, 0) {
                    return Some(mark);
                }
            }
        }

        // Diagonal, bottom-left to top-right
        for row in CONNECT - 1..ROWS {
            for col in 0..=COLS - CONNECT {
                if let Some(mark) = self.line_at(row, col, -1, 1) {
                    return Some(mark);
                }
            }
        }

        // Diagonal, top-left to bottom-right
        for row in 0..=ROWS - CONNECT {
            for col in 0..=COLS - CONNECT {
                if let Some(mark) = self.line_at(row, col, 1, 1) {
                    return Some(mark);
                }
            }
        }

        None
    }

    /// Mark owning a 4-run starting at (row, col) stepping by (dr, dc),
    /// if any. Callers keep the whole window in bounds.
    fn line_at(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Mark> {
        let Cell::Filled(mark) = self.cells[row][col] else {
            return None;
        };
        for k in 1..CONNECT as isize {
            let r = (row as isize + dr * k) as usize;
            let c = (col as isize + dc * k) as usize;
            if self.cells[r][c] != Cell::Filled(mark) {
                return None;
            }
        }
        Some(mark)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid the way the reference server printed it for
/// debugging: `_` for empty cells, the mark character otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                match self.cells[row][col] {
                    Cell::Empty => write!(f, "_ ")?,
                    Cell::Filled(mark) => write!(f, "{} ", mark)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
