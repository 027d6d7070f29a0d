//! Snapshot history.

use super::Board;
use serde::Serialize;
use tracing::{debug, instrument};

/// Ordered board snapshots, one per ply, starting with the empty board.
///
/// The list is never empty. Entries are only ever appended or dropped
/// from the tail; an existing snapshot is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the empty board is always present.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// The newest snapshot.
    pub fn latest(&self) -> &Board {
        // `new` seeds one snapshot and `truncate` keeps at least one.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Drops every snapshot after `step`.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn truncate(&mut self, step: usize) {
        let keep = step.saturating_add(1).max(1);
        if keep < self.snapshots.len() {
            debug!(discarded = self.snapshots.len() - keep, "Discarding future snapshots");
            self.snapshots.truncate(keep);
        }
    }

    /// Appends a snapshot.
    pub fn push(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    /// Labels for every entry, in order.
    pub fn labels(&self) -> impl Iterator<Item = (usize, String)> + '_ {
        (0..self.snapshots.len()).map(|index| (index, history_label(index)))
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Label of a history entry: the start, or the move number.
pub fn history_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", index)
    }
}
