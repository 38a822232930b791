//! Alternating turn invariant: Black, White, Black, ...

use super::Invariant;
use crate::engine::Engine;
use crate::types::Player;

/// Invariant: players alternate starting with Black.
///
/// While the game is in progress the player to move must also match the
/// parity of the history: Black iff an even number of moves were made.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();

        let alternates = history.iter().enumerate().all(|(i, mv)| {
            let expected = if i % 2 == 0 { Player::Black } else { Player::White };
            mv.player == expected && mv.index == i
        });
        if !alternates {
            return false;
        }

        if engine.phase().is_terminal() {
            return true;
        }
        let expected_next = if history.len() % 2 == 0 {
            Player::Black
        } else {
            Player::White
        };
        engine.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with Black"
    }
}
