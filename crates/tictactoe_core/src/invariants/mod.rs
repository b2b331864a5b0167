//! First-class invariants for tic-tac-toe history.
//!
//! Invariants are logical properties of a [`GameState`](crate::GameState).
//! They are testable independently and checked after every applied move in
//! debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_tokens;
pub mod frozen_after_win;
pub mod single_cell_step;
pub mod starts_empty;

pub use alternating_tokens::AlternatingTokens;
pub use frozen_after_win::FrozenAfterWin;
pub use single_cell_step::SingleCellStep;
pub use starts_empty::StartsEmpty;

/// Invariants that hold no matter how the turn is tracked across jumps.
pub type StructuralInvariants = (StartsEmpty, SingleCellStep, FrozenAfterWin);

/// Every history invariant, including token alternation.
pub type GameInvariants = (StartsEmpty, SingleCellStep, FrozenAfterWin, AlternatingTokens);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game.apply_move(pos);
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StartsEmpty, SingleCellStep);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new(StartsEmpty::description());
        assert_eq!(
            violation.to_string(),
            "Invariant violated: History starts from the empty board"
        );
    }
}
