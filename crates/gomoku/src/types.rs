//! Core domain types for five-in-a-row.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Black stones (moves first).
    Black,
    /// White stones.
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the cell value a stone of this player occupies.
    pub fn stone(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A single intersection on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// Black stone.
    Black,
    /// White stone.
    White,
}

impl Cell {
    /// Returns the owner of the stone in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// Checks if the cell holds no stone.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.stone()
    }
}

/// A `(row, col)` grid coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Cumulative win counts across games of one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Games won by Black.
    pub black: u32,
    /// Games won by White.
    pub white: u32,
}

impl Score {
    /// Returns the win count for a player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Records one win for a player.
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::Black => self.black += 1,
            Player::White => self.white += 1,
        }
    }
}

/// Lifecycle of a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// A player completed five in a row.
    Won {
        /// The winning player.
        player: Player,
        /// The contiguous run that won, in scan order.
        cells: Vec<Coord>,
    },
    /// The board filled up with no winner.
    Drawn,
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning cells, if the game was won.
    pub fn winning_cells(&self) -> Option<&[Coord]> {
        match self {
            Phase::Won { cells, .. } => Some(cells),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::InProgress => write!(f, "In progress"),
            Phase::Won { player, .. } => write!(f, "{} wins", player),
            Phase::Drawn => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_cell_player_round_trip() {
        for player in Player::iter() {
            assert_eq!(Cell::from(player).player(), Some(player));
        }
        assert_eq!(Cell::Empty.player(), None);
    }

    #[test]
    fn test_score_records_wins() {
        let mut score = Score::default();
        score.record_win(Player::White);
        score.record_win(Player::White);
        assert_eq!(score.wins(Player::White), 2);
        assert_eq!(score.wins(Player::Black), 0);
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(7, 11).to_string(), "(7, 11)");
    }
}
