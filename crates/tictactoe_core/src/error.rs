//! Error types for the game core.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong with a history operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HistoryErrorKind {
    /// The requested move number is not in the current history.
    #[display("move {requested} is outside a history of {len} snapshots")]
    OutOfRange {
        /// Requested move number.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
    /// A restored history does not begin with the empty board.
    #[display("history must start with the empty board")]
    MissingStart,
}

/// History error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("History error: {} at {}:{}", kind, file, line)]
pub struct HistoryError {
    /// Error kind.
    pub kind: HistoryErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: HistoryErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
