//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Token {
    /// Token X (moves first).
    X,
    /// Token O (moves second).
    O,
}

impl Token {
    /// Returns the other token.
    pub fn opponent(self) -> Self {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a token.
    Occupied(Token),
}

impl Cell {
    /// Returns the token in this cell, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(token) => Some(token),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// One immutable 3x3 board state.
///
/// Snapshots are never edited in place. A move produces a new snapshot via
/// [`BoardSnapshot::with_token`], which is what lets history keep every
/// earlier board intact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl BoardSnapshot {
    /// The all-empty board.
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; 9],
    };

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a snapshot from raw cells.
    ///
    /// Accepts any arrangement, including ones no legal game can reach.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a copy of this board with `token` placed at `pos`.
    #[instrument(skip(self))]
    pub fn with_token(&self, pos: Position, token: Token) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Occupied(token);
        Self { cells }
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Checks if every cell is empty.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Positions whose cells differ between `self` and `next`.
    pub fn changes_to(&self, next: &BoardSnapshot) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos) != next.get(*pos))
            .collect()
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(token) => write!(f, "{}", token)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
