//! Pre- and postconditions around [`TimeTravelGame::play_move`].
//!
//! `pre` decides whether a move may be applied at all. `post` compares
//! the game before and after an accepted move and re-checks every
//! invariant on the result.

use super::error::MoveError;
use super::game::TimeTravelGame;
use super::invariants::{InvariantSet, TimeTravelInvariants};
use super::rules::check_winner;
use super::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Guards for applying action `A` to state `S`.
pub trait Contract<S, A> {
    /// Whether `action` is allowed in `state`.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Whether `after` is a valid result of a transition from `before`.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The displayed board has no completed line.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::GameOver`] once someone holds a line.
    #[instrument(skip(game))]
    pub fn check(game: &TimeTravelGame) -> Result<(), MoveError> {
        match check_winner(game.current()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: nobody has marked the target square on the displayed board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &TimeTravelGame) -> Result<(), MoveError> {
        if game.current().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `play_move`.
///
/// The winner is checked before the square, so a move on a won board
/// reports [`MoveError::GameOver`] even when the square is also taken.
/// After the move, the step must be one past the old displayed step,
/// the history must end there, the turn must have passed, and
/// [`TimeTravelInvariants`] must hold.
pub struct PlayContract;

impl Contract<TimeTravelGame, Position> for PlayContract {
    fn pre(game: &TimeTravelGame, position: &Position) -> Result<(), MoveError> {
        NoWinnerYet::check(game)?;
        SquareIsEmpty::check(*position, game)?;
        Ok(())
    }

    fn post(before: &TimeTravelGame, after: &TimeTravelGame) -> Result<(), MoveError> {
        if after.step_number != before.step_number + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: step {} did not follow {}",
                after.step_number, before.step_number
            )));
        }
        if after.history.len() != after.step_number + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history has {} entries past step {}",
                after.history.len(),
                after.step_number
            )));
        }
        if after.x_is_next == before.x_is_next {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: turn did not pass".to_string(),
            ));
        }

        TimeTravelInvariants::check_all(after).map_err(MoveError::from)
    }
}
