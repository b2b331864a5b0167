//! Step invariant: each snapshot adds exactly one token.

use super::super::{BoardSnapshot, Cell, GameState};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one cell, which went
/// from empty to occupied.
pub struct SingleCellStep;

impl SingleCellStep {
    /// Checks a single step.
    pub fn step_holds(before: &BoardSnapshot, after: &BoardSnapshot) -> bool {
        match before.changes_to(after).as_slice() {
            [pos] => before.get(*pos) == Cell::Empty && after.get(*pos) != Cell::Empty,
            _ => false,
        }
    }
}

impl Invariant<GameState> for SingleCellStep {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .all(|pair| Self::step_holds(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one token on an empty cell"
    }
}
