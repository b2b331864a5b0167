//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Rules never look at history or turn
//! order, so they can be applied to any snapshot the game has produced.

pub mod win;

pub use win::{WINNING_LINES, WinResult, evaluate};
