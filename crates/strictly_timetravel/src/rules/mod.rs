//! Game rules for tic-tac-toe.
//!
//! Pure functions over boards and game positions. Rules are kept apart
//! from history storage so the game, the contracts and the front end
//! all evaluate a board the same way.

pub mod status;
pub mod win;

pub use status::{GameStatus, derive_status};
pub use win::{LINES, Win, check_winner, evaluate, winning_line};
