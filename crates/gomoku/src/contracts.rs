//! Contract-based validation for placements.
//!
//! Preconditions decide whether a placement is accepted. Postconditions
//! check that an accepted transition kept every engine invariant.

use crate::action::RejectKind;
use crate::engine::Engine;
use crate::invariants::{GomokuInvariants, InvariantSet, InvariantViolation};
use crate::types::{Cell, Coord};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
///
/// - Precondition: {P(state, action)} must hold before applying action
/// - Postcondition: {Q(before, after)} must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RejectKind>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the precondition.
    #[instrument(skip(engine))]
    pub fn check(engine: &Engine) -> Result<(), RejectKind> {
        if engine.phase().is_terminal() {
            Err(RejectKind::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell holds no stone.
///
/// Coordinates off the board are not empty; bounds are the engine's concern.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(engine))]
    pub fn check(target: &Coord, engine: &Engine) -> Result<(), RejectKind> {
        match engine.board().get(target.row, target.col) {
            Ok(Cell::Empty) => Ok(()),
            _ => Err(RejectKind::CellOccupied),
        }
    }
}

/// Composite precondition: game still running, then cell empty.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions in order.
    #[instrument(skip(engine))]
    pub fn check(target: &Coord, engine: &Engine) -> Result<(), RejectKind> {
        GameNotOver::check(engine)?;
        CellIsEmpty::check(target, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a stone.
///
/// Postconditions: exactly one more move than before, and every invariant in
/// [`GomokuInvariants`] holds.
pub struct PlacementContract;

impl Contract<Engine, Coord> for PlacementContract {
    fn pre(engine: &Engine, target: &Coord) -> Result<(), RejectKind> {
        LegalPlacement::check(target, engine)
    }

    fn post(before: &Engine, after: &Engine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GomokuInvariants::check_all(after).err().unwrap_or_default();
        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new(
                "Accepted placement records exactly one move",
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Runs [`PlacementContract::post`] on an accepted placement.
///
/// Logs each violation, then fails the debug assertion.
#[instrument(skip_all)]
pub fn assert_placement(before: &Engine, after: &Engine) {
    if let Err(violations) = PlacementContract::post(before, after) {
        for violation in &violations {
            warn!(violation = %violation.description, "Placement contract violated");
        }
        debug_assert!(violations.is_empty(), "Placement contract violated: {violations:?}");
    }
}

/// Checks every engine invariant in debug builds, logging each violation.
#[instrument(skip(engine))]
pub fn assert_invariants(engine: &Engine) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = GomokuInvariants::check_all(engine) {
        for violation in &violations {
            warn!(violation = %violation.description, "Engine invariant violated");
        }
        debug_assert!(violations.is_empty(), "Engine invariants violated: {violations:?}");
    }
}
