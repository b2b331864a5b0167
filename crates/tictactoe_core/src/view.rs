//! Presentation boundary.
//!
//! Everything a renderer needs, derived from a [`GameState`] in one pass so
//! that a frontend never reaches into history or rules itself.

use super::history::MoveEntry;
use super::rules::WinResult;
use super::types::{Cell, Token};
use super::{GameState, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Where the cell sits.
    pub position: Position,
    /// What the cell holds.
    pub cell: Cell,
    /// Whether the cell is part of the winning line.
    pub is_winner: bool,
}

/// The status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// The latest board has a winning line.
    #[display("Winner: {}", _0)]
    Winner(Token),
    /// No winner yet, including on a full board.
    #[display("Next player: {}", _0)]
    NextPlayer(Token),
}

/// Derived view of a game, rebuilt after every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Cells of the latest board, row-major.
    cells: [CellView; 9],
    /// Status line.
    status: Status,
    /// Move list, one entry per snapshot.
    moves: Vec<MoveEntry>,
    /// Winning line, if any.
    winning_line: Option<[Position; 3]>,
}

impl GameView {
    /// Builds the view for `game`.
    #[instrument(skip(game), fields(moves = game.history().moves_played()))]
    pub fn from_state(game: &GameState) -> Self {
        let win = game.winner();
        let board = game.current_board();
        let cells = Position::ALL.map(|position| CellView {
            position,
            cell: board.get(position),
            is_winner: win.is_some_and(|w| w.contains(position)),
        });
        let status = match win {
            Some(result) => Status::Winner(result.winner()),
            None => Status::NextPlayer(game.next_player()),
        };

        Self {
            cells,
            status,
            moves: game.history().entries().collect(),
            winning_line: win.as_ref().map(WinResult::line),
        }
    }

    /// Cells grouped into the three board rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_view() {
        let view = GameState::new().view();
        assert_eq!(view.status().to_string(), "Next player: X");
        assert_eq!(view.moves().len(), 1);
        assert!(view.cells().iter().all(|c| c.cell == Cell::Empty && !c.is_winner));
        assert_eq!(view.winning_line(), &None);
    }

    #[test]
    fn test_rows_follow_board_layout() {
        let view = GameState::new().view();
        let rows: Vec<Vec<Position>> = view
            .rows()
            .map(|row| row.iter().map(|c| c.position).collect())
            .collect();
        assert_eq!(rows[1], vec![Position::MiddleLeft, Position::Center, Position::MiddleRight]);
        assert_eq!(rows.len(), 3);
    }
}
