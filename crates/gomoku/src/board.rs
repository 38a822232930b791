//! Square grid of stones.

use crate::error::EngineError;
use crate::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Standard side length.
pub const DEFAULT_SIZE: usize = 15;

/// Smallest board on which five in a row can exist.
pub const MIN_SIZE: usize = 5;

/// Largest supported board, one column per label `A`..`Z` without `I`.
pub const MAX_SIZE: usize = 25;

/// N×N board stored in row-major order.
///
/// The board does no legality checking; it only guards its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] if `size` is outside
    /// [`MIN_SIZE`]..=[`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, EngineError> {
        let mut board = Self {
            size: 0,
            cells: Vec::new(),
        };
        board.reset(size)?;
        Ok(board)
    }

    /// Clears every cell, resizing to `size`.
    ///
    /// On error the board is left untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self, size: usize) -> Result<(), EngineError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(EngineError::InvalidSize { size });
        }
        self.size = size;
        self.cells.clear();
        self.cells.resize(size * size, Cell::Empty);
        Ok(())
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Sets the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), EngineError> {
        let i = self.index(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks if the cell at `(row, col)` is empty.
    pub fn is_empty_at(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        self.get(row, col).map(Cell::is_empty)
    }

    /// Returns true iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Row-major copy of the grid.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }

    /// Formats the board as plain text, `.` for empty, `X` black, `O` white.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.cells.chunks(self.size) {
            for cell in row {
                out.push(match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                });
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        if self.contains(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![Cell::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}
