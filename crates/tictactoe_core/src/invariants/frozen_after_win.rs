//! Freeze invariant: nothing follows a winning board.

use super::super::GameState;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: only the latest snapshot may contain a winning line.
pub struct FrozenAfterWin;

impl Invariant<GameState> for FrozenAfterWin {
    fn holds(game: &GameState) -> bool {
        match game.history().snapshots().split_last() {
            Some((_, earlier)) => earlier.iter().all(|board| evaluate(board).is_none()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No snapshot is appended after a winning board"
    }
}
