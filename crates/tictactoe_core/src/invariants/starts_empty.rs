//! Start invariant: history[0] is the empty board.

use super::super::GameState;
use super::Invariant;

/// Invariant: the first snapshot in history is all-empty.
pub struct StartsEmpty;

impl Invariant<GameState> for StartsEmpty {
    fn holds(game: &GameState) -> bool {
        game.history()
            .get(0)
            .is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_jump_to_start() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.jump_to(0).unwrap();
        assert!(StartsEmpty::holds(&game));
    }
}
