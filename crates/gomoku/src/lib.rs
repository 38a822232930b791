//! Five-in-a-row game logic.
//!
//! A pure engine for two-player gomoku on an N×N board (15×15 by default).
//! It owns the board, enforces turn order and move legality, detects
//! five-in-a-row and full-board draws, keeps the move history for undo and
//! counts wins across games. It performs no I/O; a presentation layer drives
//! it and renders [`GameSnapshot`]s.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid, bounds-checked, no rules
//! - **Rules**: local win scan and draw check
//! - **Engine**: turn sequencing, history, undo, score
//! - **Contracts / invariants**: placement preconditions and debug-checked
//!   consistency properties
//!
//! # Example
//!
//! ```
//! use gomoku::{Engine, Player};
//!
//! # fn main() -> Result<(), gomoku::EngineError> {
//! let mut engine = Engine::new();
//! for col in 0..4 {
//!     engine.place_stone(7, col)?; // Black
//!     engine.place_stone(0, col)?; // White
//! }
//! let outcome = engine.place_stone(7, 4)?;
//! assert!(outcome.accepted);
//! assert_eq!(outcome.phase.winner(), Some(Player::Black));
//! assert_eq!(engine.score().black, 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod shared;
mod snapshot;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, PlaceOutcome, RejectKind, UndoOutcome};
pub use board::{Board, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
pub use engine::Engine;
pub use error::EngineError;
pub use shared::SharedEngine;
pub use snapshot::GameSnapshot;
pub use types::{Cell, Coord, Phase, Player, Score};
