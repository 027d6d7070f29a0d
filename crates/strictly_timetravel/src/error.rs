//! Errors reported by game transitions.

use super::invariants::InvariantViolation;
use super::{Player, Position};

/// Error that can occur when validating or applying a transition.
///
/// The state is unchanged whenever one of these comes back from a
/// transition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),

    /// A raw board index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// A history step that does not exist.
    #[display("Step {} out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// One or more invariants failed, after a move or on a deserialized game.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<Vec<InvariantViolation>> for MoveError {
    fn from(violations: Vec<InvariantViolation>) -> Self {
        let failed: Vec<String> = violations.iter().map(ToString::to_string).collect();
        MoveError::InvariantViolation(failed.join("; "))
    }
}
