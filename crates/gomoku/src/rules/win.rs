//! Win detection for five-in-a-row.
//!
//! Only lines through the stone just placed can have changed, so the scan is
//! local: four directions, at most four steps each way.

use crate::board::Board;
use crate::types::{Cell, Coord, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Furthest the scan walks from the placed stone in either direction.
const REACH: usize = WIN_LENGTH - 1;

/// A line direction, listed in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Direction {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Row and column step for the forward walk.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Checks whether the stone at `(row, col)` completes a run for `player`.
///
/// Returns the contiguous run found in the first winning direction. The
/// placed cell comes first, then forward matches, then backward matches.
/// Overlines are wins and every matched cell is reported.
#[instrument(skip(board))]
pub fn winning_run(board: &Board, row: usize, col: usize, player: Player) -> Option<Vec<Coord>> {
    let stone = player.stone();
    Direction::iter().find_map(|direction| {
        let (dr, dc) = direction.delta();
        let mut cells = vec![Coord::new(row, col)];
        walk(board, row, col, dr, dc, stone, &mut cells);
        walk(board, row, col, -dr, -dc, stone, &mut cells);
        (cells.len() >= WIN_LENGTH).then_some(cells)
    })
}

/// Collects up to [`REACH`] matching cells stepping by `(dr, dc)`.
fn walk(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    stone: Cell,
    cells: &mut Vec<Coord>,
) {
    for step in 1..=REACH as isize {
        let next = row
            .checked_add_signed(dr * step)
            .zip(col.checked_add_signed(dc * step));
        match next {
            Some((r, c)) if board.get(r, c) == Ok(stone) => cells.push(Coord::new(r, c)),
            _ => break,
        }
    }
}
