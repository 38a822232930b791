//! Engine error types.
//!
//! These are faults, not outcomes: an out-of-range coordinate means the
//! presentation layer failed to clamp its input. Ordinary refusals such as
//! playing on an occupied cell are reported through
//! [`RejectKind`](crate::RejectKind) instead.

use crate::board::{MAX_SIZE, MIN_SIZE};

/// Error raised by board or engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Coordinates fall outside the board.
    #[display("Cell ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// Board side length is too small for five in a row or too large to hold.
    #[display("Board size {} is invalid (must be {} to {})", size, MIN_SIZE, MAX_SIZE)]
    InvalidSize {
        /// Requested side length.
        size: usize,
    },

    /// A shared engine lock was poisoned by a panicking holder.
    #[display("Engine lock poisoned")]
    Poisoned,
}

impl std::error::Error for EngineError {}
