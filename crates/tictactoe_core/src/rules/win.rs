//! Win detection logic for tic-tac-toe.

use super::super::{BoardSnapshot, Cell, Position, Token};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// A completed line and the token that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    winner: Token,
    line: [Position; 3],
}

impl WinResult {
    /// The winning token.
    pub fn winner(&self) -> Token {
        self.winner
    }

    /// The three positions of the winning line, as declared in [`WINNING_LINES`].
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Checks if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Classifies a board.
///
/// Returns the first line in [`WINNING_LINES`] whose three cells hold the same
/// token, or `None`. A full board without such a line also yields `None`;
/// draws are not reported here.
#[instrument(skip(board))]
pub fn evaluate(board: &BoardSnapshot) -> Option<WinResult> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Cell::Occupied(winner)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(WinResult { winner, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(moves: &[(Position, Token)]) -> BoardSnapshot {
        moves
            .iter()
            .fold(BoardSnapshot::new(), |board, (pos, token)| board.with_token(*pos, *token))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&BoardSnapshot::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Token::X),
            (Position::TopCenter, Token::X),
            (Position::TopRight, Token::X),
        ]);
        let result = evaluate(&board).expect("top row is complete");
        assert_eq!(result.winner(), Token::X);
        assert_eq!(
            result.line(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_anti_diagonal_reports_declared_order() {
        let board = board_with(&[
            (Position::TopRight, Token::O),
            (Position::Center, Token::O),
            (Position::BottomLeft, Token::O),
        ]);
        let result = evaluate(&board).expect("anti-diagonal is complete");
        assert_eq!(result.winner(), Token::O);
        assert_eq!(
            result.line(),
            [Position::BottomLeft, Position::Center, Position::TopRight]
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Token::X),
            (Position::TopCenter, Token::O),
            (Position::TopRight, Token::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_declared_line_wins_on_injected_board() {
        // Not reachable in play: both the top row and the left column are X.
        let board = board_with(&[
            (Position::TopLeft, Token::X),
            (Position::TopCenter, Token::X),
            (Position::TopRight, Token::X),
            (Position::MiddleLeft, Token::X),
            (Position::BottomLeft, Token::X),
        ]);
        let result = evaluate(&board).expect("two complete lines");
        assert_eq!(result.line()[1], Position::TopCenter);
        assert!(!result.contains(Position::MiddleLeft));
    }

    #[test]
    fn test_full_board_without_line_is_none() {
        // X O X / O X X / O X O
        let board = board_with(&[
            (Position::TopLeft, Token::X),
            (Position::TopCenter, Token::O),
            (Position::TopRight, Token::X),
            (Position::MiddleLeft, Token::O),
            (Position::Center, Token::X),
            (Position::MiddleRight, Token::X),
            (Position::BottomLeft, Token::O),
            (Position::BottomCenter, Token::X),
            (Position::BottomRight, Token::O),
        ]);
        assert_eq!(board.occupied(), 9);
        assert_eq!(evaluate(&board), None);
    }
}
