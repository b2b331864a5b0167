//! Ordered board history with time-travel truncation.

use super::error::{HistoryError, HistoryErrorKind};
use super::types::BoardSnapshot;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Every board from game start to the present.
///
/// Index 0 is always the empty board, so history is never empty. It only
/// grows by appending, and only shrinks by truncating to an earlier move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BoardSnapshot>", into = "Vec<BoardSnapshot>")]
pub struct History {
    snapshots: Vec<BoardSnapshot>,
}

#[allow(clippy::len_without_is_empty)]
impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![BoardSnapshot::EMPTY],
        }
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &BoardSnapshot {
        // Never empty: construction seeds index 0 and truncation keeps it.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Number of moves that led to the latest snapshot.
    pub fn moves_played(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot after `move_number` moves.
    pub fn get(&self, move_number: usize) -> Option<&BoardSnapshot> {
        self.snapshots.get(move_number)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[BoardSnapshot] {
        &self.snapshots
    }

    /// Move-list entries, one per snapshot.
    pub fn entries(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        (0..self.snapshots.len()).map(MoveEntry::new)
    }

    /// Appends a snapshot.
    pub(crate) fn push(&mut self, snapshot: BoardSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Keeps snapshots `0..=move_number` and drops the rest.
    #[track_caller]
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub(crate) fn truncate_to(&mut self, move_number: usize) -> Result<(), HistoryError> {
        if move_number >= self.snapshots.len() {
            return Err(HistoryError::new(HistoryErrorKind::OutOfRange {
                requested: move_number,
                len: self.snapshots.len(),
            }));
        }
        self.snapshots.truncate(move_number + 1);
        debug!(len = self.snapshots.len(), "History truncated");
        Ok(())
    }
}

impl TryFrom<Vec<BoardSnapshot>> for History {
    type Error = HistoryError;

    #[track_caller]
    fn try_from(snapshots: Vec<BoardSnapshot>) -> Result<Self, Self::Error> {
        match snapshots.first() {
            Some(start) if start.is_blank() => Ok(Self { snapshots }),
            _ => Err(HistoryError::new(HistoryErrorKind::MissingStart)),
        }
    }
}

impl From<History> for Vec<BoardSnapshot> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index into history this entry jumps to.
    pub move_number: usize,
}

impl MoveEntry {
    /// Creates an entry for `move_number`.
    pub fn new(move_number: usize) -> Self {
        Self { move_number }
    }

    /// Checks if this entry is the starting board.
    pub fn is_start(&self) -> bool {
        self.move_number == 0
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_start() {
            write!(f, "Game Start")
        } else {
            write!(f, "Move #{}", self.move_number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Token};

    fn history_of(len: usize) -> History {
        let mut history = History::new();
        for (i, pos) in Position::ALL.into_iter().take(len - 1).enumerate() {
            let token = if i % 2 == 0 { Token::X } else { Token::O };
            let next = history.latest().with_token(pos, token);
            history.push(next);
        }
        history
    }

    #[test]
    fn test_new_history_is_single_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.moves_played(), 0);
        assert!(history.latest().is_blank());
    }

    #[test]
    fn test_truncate_keeps_inclusive_prefix() {
        let mut history = history_of(5);
        history.truncate_to(2).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().occupied(), 2);
    }

    #[test]
    fn test_truncate_to_last_index_is_noop() {
        let mut history = history_of(4);
        let before = history.clone();
        history.truncate_to(3).unwrap();
        assert_eq!(history, before);
    }

    #[test]
    fn test_truncate_out_of_range_leaves_history() {
        let mut history = history_of(3);
        let err = history.truncate_to(3).unwrap_err();
        assert_eq!(
            err.kind,
            HistoryErrorKind::OutOfRange {
                requested: 3,
                len: 3
            }
        );
        assert_eq!(history.len(), 3);
        assert!(err.to_string().contains("outside a history of 3 snapshots"));
    }

    #[test]
    fn test_restore_rejects_empty_history() {
        let err = serde_json::from_str::<History>("[]").unwrap_err();
        assert!(err.to_string().contains("must start with the empty board"));
    }

    #[test]
    fn test_restore_rejects_non_blank_start() {
        let started = vec![BoardSnapshot::EMPTY.with_token(Position::Center, Token::X)];
        let err = History::try_from(started).unwrap_err();
        assert_eq!(err.kind, HistoryErrorKind::MissingStart);
    }

    #[test]
    fn test_restore_keeps_valid_history() {
        let history = history_of(4);
        let json = serde_json::to_string(&history).unwrap();
        let restored: History = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
        assert_eq!(restored.latest().occupied(), 3);
    }

    #[test]
    fn test_entry_labels() {
        let labels: Vec<String> = history_of(3).entries().map(|e| e.to_string()).collect();
        assert_eq!(labels, vec!["Game Start", "Move #1", "Move #2"]);
    }
}
