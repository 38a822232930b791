//! Game rules for five-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the
//! engine so contracts and tests can call them directly.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Direction, WIN_LENGTH, winning_run};
