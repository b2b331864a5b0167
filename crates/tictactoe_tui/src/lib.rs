//! Terminal front end for time-travel tic-tac-toe.
//!
//! The game itself lives in `tictactoe_core`; this crate only turns terminal
//! events into game operations and renders the derived view.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{App, AppEvent};
pub use config::{ConfigError, TuiConfig};
pub use input::HitMap;
