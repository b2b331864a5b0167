//! Move events and their outcomes.

use super::{Position, Token};
use serde::{Deserialize, Serialize};

/// A token placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The token that was placed.
    pub token: Token,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(token: Token, position: Position) -> Self {
        Self { token, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.token, self.position.label())
    }
}

/// Why a move request left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The latest board already has a winning line.
    #[display("Game already won by {}", _0)]
    GameWon(Token),

    /// The requested cell holds a token.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

/// Result of asking the game to place a token.
///
/// Ignored requests are ordinary outcomes, not errors: the game silently
/// keeps its state and the caller simply re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A new snapshot was appended.
    Placed(Move),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Checks if the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
