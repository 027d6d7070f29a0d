//! Status derivation.
//!
//! Status is never stored; it is recomputed from the displayed snapshot
//! every time it is asked for.

use super::super::{Board, Player};
use super::win::check_winner;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of plies that fill the board.
pub const FULL_BOARD_STEP: usize = 9;

/// Status line shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player completed a line on the displayed board.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// All nine squares are filled with no line.
    #[display("Draw")]
    Draw,
    /// Play continues with the given player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns true if no further move is accepted from this position.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

/// Derives the status for the board displayed at `step_number`.
///
/// A win takes priority over a draw, so a ninth move that completes a
/// line reports the winner.
#[instrument(skip(board))]
pub fn derive_status(board: &Board, step_number: usize, x_is_next: bool) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Winner(winner)
    } else if step_number == FULL_BOARD_STEP {
        GameStatus::Draw
    } else if x_is_next {
        GameStatus::NextPlayer(Player::X)
    } else {
        GameStatus::NextPlayer(Player::O)
    }
}
