//! Contract-based move validation.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} apply_move {Q}`. A failed precondition is not an error here; it is
//! the reason a move request is ignored.

use super::action::IgnoreReason;
use super::invariants::{InvariantSet, InvariantViolation, StructuralInvariants};
use super::rules::evaluate;
use super::{GameState, Position};
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IgnoreReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the latest board has no winning line.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Validates the precondition.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), IgnoreReason> {
        match evaluate(game.current_board()) {
            Some(result) => Err(IgnoreReason::GameWon(result.winner())),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Validates the precondition.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), IgnoreReason> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(IgnoreReason::Occupied(position))
        }
    }
}

/// Composite precondition, checked in the same order as the rules: a won
/// board rejects every cell, occupied or not.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), IgnoreReason> {
        NoWinnerYet::check(game)?;
        CellIsEmpty::check(position, game)?;
        Ok(())
    }
}

/// Contract for [`GameState::apply_move`].
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, position: &Position) -> Result<(), IgnoreReason> {
        LegalMove::check(*position, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new(
                "An applied move appends exactly one snapshot",
            ));
        }
        if let Err(mut found) = StructuralInvariants::check_all(after) {
            violations.append(&mut found);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
