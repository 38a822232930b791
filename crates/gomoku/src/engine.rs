//! Game engine: turn order, move validation, win/draw detection, undo.

use crate::action::{Move, PlaceOutcome, UndoOutcome};
use crate::board::{Board, DEFAULT_SIZE};
use crate::contracts::{Contract, PlacementContract, assert_invariants};
use crate::error::EngineError;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Coord, Phase, Player, Score};
use tracing::{debug, info, instrument, warn};

/// A five-in-a-row game between two local players.
///
/// Owns the board exclusively. Every operation runs to completion and either
/// applies fully or leaves the engine exactly as it was. The score survives
/// [`Engine::new_game`].
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
    pub(crate) score: Score,
}

impl Engine {
    /// Creates an engine with a standard 15×15 board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    /// Creates an engine with a custom board size.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] if `size` is below 5 or above 25.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, EngineError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            current_player: Player::Black,
            phase: Phase::InProgress,
            history: Vec::new(),
            score: Score::default(),
        }
    }

    /// Places the current player's stone at `(row, col)`.
    ///
    /// A refused placement (game over, occupied cell) is an `Ok` outcome with
    /// `accepted == false` and no state change.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinates are off the
    /// board. The engine is left untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_stone(&mut self, row: usize, col: usize) -> Result<PlaceOutcome, EngineError> {
        if !self.board.contains(row, col) {
            warn!(size = self.board.size(), "Placement outside the board");
            return Err(EngineError::OutOfBounds {
                row,
                col,
                size: self.board.size(),
            });
        }

        let target = Coord::new(row, col);
        if let Err(reason) = PlacementContract::pre(self, &target) {
            debug!(%reason, "Placement rejected");
            return Ok(PlaceOutcome::rejected(reason, self.phase.clone()));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        self.board.set(row, col, player.stone())?;
        self.history
            .push(Move::new(row, col, player, self.history.len()));
        debug!(moves = self.history.len(), "Stone placed");

        if let Some(cells) = rules::winning_run(&self.board, row, col, player) {
            self.score.record_win(player);
            info!(%player, run = cells.len(), score = ?self.score, "Five in a row");
            self.phase = Phase::Won { player, cells };
        } else if rules::is_draw(&self.board) {
            info!(moves = self.history.len(), "Board full, game drawn");
            self.phase = Phase::Drawn;
        } else {
            self.current_player = player.opponent();
        }

        // Postcondition: history grew by one, invariants hold
        #[cfg(debug_assertions)]
        crate::contracts::assert_placement(&before, self);

        Ok(PlaceOutcome::accepted(self.phase.clone()))
    }

    /// Takes back the most recent move.
    ///
    /// Does nothing when there is no move to take back or the game has
    /// already ended; a finished game needs [`Engine::new_game`].
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> UndoOutcome {
        if self.phase.is_terminal() {
            debug!(phase = %self.phase, "Undo refused after game end");
            return self.undo_outcome(false);
        }

        let Some(last) = self.history.pop() else {
            debug!("Nothing to undo");
            return self.undo_outcome(false);
        };

        if let Err(error) = self.board.set(last.row, last.col, Cell::Empty) {
            warn!(%error, %last, "Recorded move lies outside the board");
            self.history.push(last);
            return self.undo_outcome(false);
        }
        self.current_player = last.player;
        debug!(%last, "Move undone");

        assert_invariants(self);
        self.undo_outcome(true)
    }

    fn undo_outcome(&self, accepted: bool) -> UndoOutcome {
        UndoOutcome {
            accepted,
            phase: self.phase.clone(),
        }
    }

    /// Starts a fresh game, keeping the score.
    ///
    /// `size` resizes the board; `None` keeps the current size.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] for sizes outside 5..=25, leaving
    /// the current game untouched.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, size: Option<usize>) -> Result<(), EngineError> {
        let size = size.unwrap_or(self.board.size());
        self.board.reset(size)?;
        self.history.clear();
        self.current_player = Player::Black;
        self.phase = Phase::InProgress;
        info!(size, score = ?self.score, "New game");
        Ok(())
    }

    /// Captures the full observable state for a presentation layer.
    #[instrument(skip(self))]
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board.rows(),
            self.current_player,
            self.phase.clone(),
            self.history.clone(),
            self.score,
        )
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Returns the winning run, if the game was won.
    pub fn winning_cells(&self) -> Option<&[Coord]> {
        self.phase.winning_cells()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
