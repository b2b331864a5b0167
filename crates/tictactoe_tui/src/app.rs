//! Application state and event handling.

use crate::config::TuiConfig;
use crate::input::HitMap;
use tictactoe_core::{GameState, GameView, MoveOutcome, Position};
use tracing::{debug, info, instrument, warn};

/// Everything the front end can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A board cell was clicked.
    CellClicked(Position),
    /// A move-list entry was clicked.
    HistorySelected(usize),
    /// The user asked to leave.
    Quit,
}

/// Main application state.
///
/// Owns the one game of this session. Events are applied one at a time, in
/// the order they arrive.
#[derive(Debug)]
pub struct App {
    game: GameState,
    hit_map: HitMap,
    cell_hints: bool,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: GameState::with_turn_policy(*config.turn_policy()),
            hit_map: HitMap::new(),
            cell_hints: *config.cell_hints(),
            running: true,
        }
    }

    /// The current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// View of the current game.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Whether empty cells show their key.
    pub fn cell_hints(&self) -> bool {
        self.cell_hints
    }

    /// Whether the event loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clickable areas from the last frame.
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Replaces the clickable areas after a draw.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Applies one event to the game.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CellClicked(position) => match self.game.apply_move(position) {
                MoveOutcome::Placed(placed) => debug!(%placed, "Cell click applied"),
                MoveOutcome::Ignored(reason) => debug!(%reason, "Cell click ignored"),
            },
            AppEvent::HistorySelected(move_number) => {
                if let Err(e) = self.game.jump_to(move_number) {
                    warn!(error = %e, "History selection rejected");
                }
            }
            AppEvent::Quit => {
                info!("User quit");
                self.running = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Status, Token, TurnPolicy};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_clicks_alternate_tokens() {
        let mut app = app();
        app.handle_event(AppEvent::CellClicked(Position::Center));
        app.handle_event(AppEvent::CellClicked(Position::TopLeft));

        let board = app.game().current_board();
        assert_eq!(board.get(Position::Center).token(), Some(Token::X));
        assert_eq!(board.get(Position::TopLeft).token(), Some(Token::O));
    }

    #[test]
    fn test_click_on_occupied_cell_changes_nothing() {
        let mut app = app();
        app.handle_event(AppEvent::CellClicked(Position::Center));
        app.handle_event(AppEvent::CellClicked(Position::Center));
        assert_eq!(app.game().history().len(), 2);
    }

    #[test]
    fn test_history_selection_jumps() {
        let mut app = app();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            app.handle_event(AppEvent::CellClicked(pos));
        }
        app.handle_event(AppEvent::HistorySelected(1));

        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.view().moves().len(), 2);
    }

    #[test]
    fn test_invalid_history_selection_is_rejected() {
        let mut app = app();
        app.handle_event(AppEvent::HistorySelected(4));
        assert_eq!(app.game().history().len(), 1);
        assert!(app.is_running());
    }

    #[test]
    fn test_win_shows_in_view() {
        let mut app = app();
        // X: 0, 1, 2 / O: 3, 4
        for index in [0, 3, 1, 4, 2] {
            app.handle_event(AppEvent::CellClicked(Position::from_index(index).unwrap()));
        }
        assert_eq!(app.view().status(), &Status::Winner(Token::X));
    }

    #[test]
    fn test_config_turn_policy_is_used() {
        let mut config = TuiConfig::default();
        config.set_turn_policy(TurnPolicy::Recompute);
        let app = App::new(&config);
        assert_eq!(app.game().turn_policy(), TurnPolicy::Recompute);
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = app();
        app.handle_event(AppEvent::Quit);
        assert!(!app.is_running());
    }
}
