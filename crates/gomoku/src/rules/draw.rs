//! Draw detection for five-in-a-row.

use crate::board::Board;
use tracing::instrument;

/// Checks whether the game is drawn after a non-winning move.
///
/// Callers must run the win check first; a full board that also completes a
/// run is a win.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
