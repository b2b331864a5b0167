//! Alternation invariant: X, O, X, O, ... along history.

use super::super::{GameState, Token};
use super::Invariant;

/// Invariant: tokens placed along history alternate, starting with X.
///
/// With [`TurnPolicy::Retain`](crate::TurnPolicy::Retain), a backward jump
/// keeps the current player, so the next placement can repeat a token. That
/// is the one way this invariant is known to break.
pub struct AlternatingTokens;

impl AlternatingTokens {
    /// Tokens placed at each step, oldest first.
    pub fn placed_tokens(game: &GameState) -> Vec<Option<Token>> {
        game.history()
            .snapshots()
            .windows(2)
            .map(|pair| {
                let [before, after] = pair else {
                    return None;
                };
                match before.changes_to(after).as_slice() {
                    [pos] => after.get(*pos).token(),
                    _ => None,
                }
            })
            .collect()
    }
}

impl Invariant<GameState> for AlternatingTokens {
    fn holds(game: &GameState) -> bool {
        let mut expected = Token::X;
        for placed in Self::placed_tokens(game) {
            if placed != Some(expected) {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "Tokens alternate X, O, X, O, ..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_fresh_moves_alternate() {
        let mut game = GameState::new();
        for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
            game.apply_move(pos);
        }
        assert_eq!(
            AlternatingTokens::placed_tokens(&game),
            vec![Some(Token::X), Some(Token::O), Some(Token::X)]
        );
        assert!(AlternatingTokens::holds(&game));
    }

    #[test]
    fn test_retained_turn_after_jump_breaks_alternation() {
        let mut game = GameState::new();
        game.apply_move(Position::Center); // X
        game.apply_move(Position::TopLeft); // O
        game.jump_to(1).unwrap();

        // The turn was not rewound, so X plays again.
        game.apply_move(Position::BottomRight);
        assert!(!AlternatingTokens::holds(&game));
    }
}
