//! Replay invariant: the history rebuilds the board exactly.

use super::Invariant;
use crate::board::Board;
use crate::engine::Engine;

/// Invariant: replaying the history onto an empty board reproduces it.
///
/// No move may land on a cell an earlier move already took, and no stone may
/// exist that the history does not account for.
pub struct MonotonicBoardInvariant;

impl Invariant<Engine> for MonotonicBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        let Ok(mut replayed) = Board::new(engine.board().size()) else {
            return false;
        };

        for mv in engine.history() {
            if replayed.is_empty_at(mv.row, mv.col) != Ok(true) {
                return false;
            }
            if replayed.set(mv.row, mv.col, mv.player.stone()).is_err() {
                return false;
            }
        }

        replayed == *engine.board()
    }

    fn description() -> &'static str {
        "Board matches a replay of the move history"
    }
}
