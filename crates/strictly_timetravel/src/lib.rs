//! Strictly Timetravel - tic-tac-toe with a snapshot history.
//!
//! Every accepted move appends an immutable board snapshot. Any earlier
//! snapshot can be revisited with [`TimeTravelGame::jump_to`]; playing a
//! move from there discards the abandoned future and starts a new branch.
//!
//! # Architecture
//!
//! - **Rules**: pure win detection over the 8 fixed lines, status derivation
//! - **History**: the ordered list of board snapshots
//! - **Game**: the step cursor and turn flag, with `play_move` / `jump_to`
//! - **Contracts / Invariants**: pre- and postconditions checked around moves
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameStatus, Player, Position, TimeTravelGame};
//!
//! let mut game = TimeTravelGame::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::MiddleLeft, Position::TopRight] {
//!     game.play_move(pos).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//!
//! game.jump_to(0).unwrap();
//! game.play_move(Position::MiddleRight).unwrap();
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::{GameStatus, LINES, Win, check_winner, derive_status, evaluate, winning_line};

// Crate-level exports - History and game state
pub use game::TimeTravelGame;
pub use history::{History, history_label};

// Crate-level exports - Errors and verification
pub use contracts::{Contract, NoWinnerYet, PlayContract, SquareIsEmpty};
pub use error::MoveError;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, SnapshotLineageInvariant,
    StepCountInvariant, TimeTravelInvariants,
};

// Crate-level exports - Serializable view
pub use view::{GameView, HistoryItem};
