//! Tic-tac-toe with move history and time-travel.
//!
//! # Architecture
//!
//! - **GameState**: owns the board history and the player who moved last;
//!   the only mutations are [`GameState::apply_move`] and
//!   [`GameState::jump_to`].
//! - **Rules**: [`evaluate`] classifies a single snapshot as won or not.
//! - **View**: [`GameView`] is everything a renderer needs, derived from a
//!   game state.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Position, Token};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::Center,
//!             Position::MiddleLeft, Position::BottomRight] {
//!     game.apply_move(pos);
//! }
//! let win = game.winner().expect("X completed the diagonal");
//! assert_eq!(win.winner(), Token::X);
//!
//! game.jump_to(0).unwrap();
//! assert!(game.current_board().is_blank());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{IgnoreReason, Move, MoveOutcome};
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract, NoWinnerYet};
pub use error::{HistoryError, HistoryErrorKind};
pub use game::{GameState, TurnPolicy};
pub use history::{History, MoveEntry};
pub use position::Position;
pub use rules::{WINNING_LINES, WinResult, evaluate};
pub use types::{BoardSnapshot, Cell, Token};
pub use view::{CellView, GameView, Status};
