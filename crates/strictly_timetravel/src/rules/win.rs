//! Three-in-a-row detection.

use super::super::{Board, Player, Position, Square};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in the order they are checked.
///
/// Rows first, then columns, then the two diagonals. When a malformed
/// board holds more than one complete line, the earliest one here wins.
#[rustfmt::skip]
pub const LINES: [[Position; 3]; 8] = {
    use Position::*;
    [
        [TopLeft, TopCenter, TopRight],
        [MiddleLeft, Center, MiddleRight],
        [BottomLeft, BottomCenter, BottomRight],
        [TopLeft, MiddleLeft, BottomLeft],
        [TopCenter, Center, BottomCenter],
        [TopRight, MiddleRight, BottomRight],
        [TopLeft, Center, BottomRight],
        [TopRight, Center, BottomLeft],
    ]
};

/// A completed line: who owns it and which three squares form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Win {
    player: Player,
    line: [Position; 3],
}

impl Win {
    /// The player holding the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three positions of the line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Returns true if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates a board for a completed line.
///
/// Returns the first line in [`LINES`] order whose three squares hold the
/// same mark. Total over every board, including ones unreachable by legal
/// play.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(Win::new(player, [a, b, c]))
            }
            _ => None,
        }
    })
}

/// Owner of the winning line, if any.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.player())
}

/// Positions of the winning line, or an empty list when nobody has won.
pub fn winning_line(board: &Board) -> Vec<Position> {
    evaluate(board)
        .map(|win| win.line().to_vec())
        .unwrap_or_default()
}
