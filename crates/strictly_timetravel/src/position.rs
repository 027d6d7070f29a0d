//! Typed board squares.
//!
//! Positions are numbered 0-8 row-major and named in kebab case
//! (`top-left` .. `bottom-right`). Both forms are accepted as input.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};
use tracing::instrument;

/// One of the nine squares.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[repr(usize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Position {
    /// Index 0.
    TopLeft,
    /// Index 1.
    TopCenter,
    /// Index 2.
    TopRight,
    /// Index 3.
    MiddleLeft,
    /// Index 4.
    Center,
    /// Index 5.
    MiddleRight,
    /// Index 6.
    BottomLeft,
    /// Index 7.
    BottomCenter,
    /// Index 8.
    BottomRight,
}

impl Position {
    /// Row-major, matching board indices.
    #[rustfmt::skip]
    pub const ALL: [Position; 9] = {
        use Position::*;
        [
            TopLeft, TopCenter, TopRight,
            MiddleLeft, Center, MiddleRight,
            BottomLeft, BottomCenter, BottomRight,
        ]
    };

    /// Kebab-case name, e.g. `middle-right`.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Reads a square typed by a user: an index `0`-`8` or a name.
    #[instrument]
    pub fn from_label_or_number(input: &str) -> Option<Position> {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(index) => Self::from_index(index),
            Err(_) => input.parse().ok(),
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }

    /// Position at a zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3)
            .then(|| Self::from_index(row * 3 + col))
            .flatten()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Empty squares of `board`, in index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .into_iter()
            .filter(|&pos| board.is_empty(pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_declaration_order() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL);
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.col(), 2);
        assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn test_user_input() {
        assert_eq!(Position::from_label_or_number(" 4 "), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("Top-Right"), Some(Position::TopRight));
        assert_eq!(Position::from_label_or_number("9"), None);
        assert_eq!(Position::from_label_or_number("nowhere"), None);
        assert_eq!(Position::BottomCenter.to_string(), "bottom-center");
    }

    #[test]
    fn test_valid_moves_skips_marks() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::Center));
        assert_eq!(moves[0], Position::TopCenter);
    }
}
