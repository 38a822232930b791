//! Read-only view of an engine for presentation layers.

use crate::action::Move;
use crate::types::{Cell, Phase, Player, Score};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GameSnapshot {
    /// Grid rows, top to bottom.
    board: Vec<Vec<Cell>>,
    /// Player to move (or the winner, once won).
    current_player: Player,
    /// Game phase.
    phase: Phase,
    /// Moves in play order.
    history: Vec<Move>,
    /// Cumulative score.
    score: Score,
}

impl GameSnapshot {
    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row)?.get(col).copied()
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.board.len()
    }

    /// Most recent move.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }
}
