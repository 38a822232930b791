//! Moves and the outcomes of engine operations.
//!
//! Moves are recorded domain events. Outcomes are plain values the
//! presentation layer inspects after each call.

use crate::types::{Coord, Phase, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A stone placed by a player, as recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Row of the stone.
    pub row: usize,
    /// Column of the stone.
    pub col: usize,
    /// The player who placed it.
    pub player: Player,
    /// Zero-based position in the game's move sequence.
    pub index: usize,
}

impl Move {
    /// Returns the coordinate of this move.
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.index + 1, self.player, self.coord())
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectKind {
    /// The target cell already holds a stone.
    #[display("Cell is already occupied")]
    CellOccupied,
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of [`Engine::place_stone`](crate::Engine::place_stone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOutcome {
    /// Whether the stone was placed.
    pub accepted: bool,
    /// Reason for refusal, set only when not accepted.
    pub reason: Option<RejectKind>,
    /// Phase after the call.
    pub phase: Phase,
    /// Winning run, set only when this placement won.
    pub winning_cells: Option<Vec<Coord>>,
}

impl PlaceOutcome {
    pub(crate) fn accepted(phase: Phase) -> Self {
        let winning_cells = phase.winning_cells().map(<[Coord]>::to_vec);
        Self {
            accepted: true,
            reason: None,
            phase,
            winning_cells,
        }
    }

    pub(crate) fn rejected(reason: RejectKind, phase: Phase) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
            phase,
            winning_cells: None,
        }
    }
}

/// Result of [`Engine::undo`](crate::Engine::undo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoOutcome {
    /// Whether a move was taken back.
    pub accepted: bool,
    /// Phase after the call.
    pub phase: Phase,
}
