//! Game state: history, turn tracking and the two mutations.

use super::action::{Move, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::error::HistoryError;
use super::history::History;
use super::invariants::{
    AlternatingTokens, GameInvariants, Invariant, InvariantSet, InvariantViolation,
};
use super::rules::{WinResult, evaluate};
use super::types::{BoardSnapshot, Token};
use super::view::GameView;
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How [`GameState::jump_to`] treats the current player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPolicy {
    /// Keep the current player across jumps.
    ///
    /// After a backward jump the next player may not match whose turn it was
    /// at that point in history, and the next move can repeat a token. This
    /// is how the game has always played and stays the default.
    #[default]
    Retain,
    /// Set the current player to whoever placed the last token of the
    /// truncated history.
    Recompute,
}

/// A single game session.
///
/// Owns the history and the token of the player who moved last. Only
/// [`apply_move`](Self::apply_move) and [`jump_to`](Self::jump_to) change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: History,
    current_player: Token,
    turn_policy: TurnPolicy,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_turn_policy(TurnPolicy::default())
    }

    /// Creates a new game using `turn_policy` for jumps.
    #[instrument]
    pub fn with_turn_policy(turn_policy: TurnPolicy) -> Self {
        Self {
            history: History::new(),
            current_player: Token::O,
            turn_policy,
        }
    }

    /// The latest board.
    pub fn current_board(&self) -> &BoardSnapshot {
        self.history.latest()
    }

    /// The token that moves next.
    pub fn next_player(&self) -> Token {
        self.current_player.opponent()
    }

    /// The token of the player who just moved.
    pub fn current_player(&self) -> Token {
        self.current_player
    }

    /// Board history, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The jump policy in effect.
    pub fn turn_policy(&self) -> TurnPolicy {
        self.turn_policy
    }

    /// Winning line on the latest board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        evaluate(self.current_board())
    }

    /// Places the next player's token at `position`.
    ///
    /// Does nothing if the latest board is already won or the cell is taken;
    /// the returned outcome says which.
    #[instrument(
        skip(self),
        fields(next = %self.next_player(), moves = self.history.moves_played())
    )]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if let Err(reason) = MoveContract::pre(self, &position) {
            debug!(%reason, "Move ignored");
            return MoveOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let token = self.next_player();
        let snapshot = self.current_board().with_token(position, token);
        self.history.push(snapshot);
        self.current_player = token;

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            if let Err(violations) = &post {
                for violation in violations {
                    warn!(%violation, "Postcondition failed");
                }
            }
            debug_assert!(post.is_ok(), "move postcondition failed: {:?}", post);
        }

        if !AlternatingTokens::holds(self) {
            warn!(
                %token,
                policy = ?self.turn_policy,
                "Tokens no longer alternate; the turn was retained across a jump"
            );
        }

        let placed = Move::new(token, position);
        match self.winner() {
            Some(result) => info!(%placed, winner = %result.winner(), "Winning move"),
            None => debug!(%placed, "Move applied"),
        }
        MoveOutcome::Placed(placed)
    }

    /// Truncates history to `0..=move_number`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if `move_number` is not an index into the
    /// current history. State is unchanged in that case.
    #[track_caller]
    #[instrument(skip(self), fields(len = self.history.len(), policy = ?self.turn_policy))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), HistoryError> {
        self.history.truncate_to(move_number)?;
        if self.turn_policy == TurnPolicy::Recompute {
            self.current_player = self.last_placed_token().unwrap_or(Token::O);
        }
        debug!(current_player = %self.current_player, "Jumped");
        Ok(())
    }

    /// Checks every history invariant.
    pub fn verify(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }

    /// Derives the presentation view.
    pub fn view(&self) -> GameView {
        GameView::from_state(self)
    }

    fn last_placed_token(&self) -> Option<Token> {
        let snapshots = self.history.snapshots();
        let [.., before, after] = snapshots else {
            return None;
        };
        before
            .changes_to(after)
            .first()
            .and_then(|pos| after.get(*pos).token())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
