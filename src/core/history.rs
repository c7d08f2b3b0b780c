//! Move history.
//!
//! Every successful move appends one `HistoryEntry`. The log is never
//! edited in place; only a game reset clears it. The move counter is the
//! log's length.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A recorded move: where a piece came from and where it went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub from: Coord,
    pub to: Coord,
}

impl HistoryEntry {
    /// Create a history entry.
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
