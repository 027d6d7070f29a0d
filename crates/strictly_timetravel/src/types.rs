//! Marks, squares and the board value.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// One of the two sides. X always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    #[allow(missing_docs)]
    #[display("X")]
    X,
    #[allow(missing_docs)]
    #[display("O")]
    O,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Who places the mark on ply `ply` (0-based): X on even plies.
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Self::X } else { Self::O }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    #[allow(missing_docs)]
    #[default]
    Empty,
    /// Holds this player's mark.
    Occupied(Player),
}

impl Square {
    /// The mark's owner, if the cell is taken.
    pub fn player(self) -> Option<Player> {
        match self {
            Self::Occupied(player) => Some(player),
            Self::Empty => None,
        }
    }
}

/// Nine cells, row-major.
///
/// A board is a plain value: history snapshots are copies, and
/// [`with_mark`](Self::with_mark) returns a new board instead of
/// mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// The empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `pos`.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites the cell at `pos`.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// True if nobody has marked `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).player().is_none()
    }

    /// Raw cells, indexed like [`Position::to_index`].
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Marks placed so far.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter_map(|sq| sq.player()).count()
    }

    /// Copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Plain-text grid. Empty cells show their 1-based key number.
    pub fn display(&self) -> String {
        self.squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| match cell {
                        Square::Occupied(player) => player.to_string(),
                        Square::Empty => (row * 3 + col + 1).to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}
