//! Alternating turn invariant: the turn flag follows the step parity.

use super::super::TimeTravelGame;
use super::Invariant;

/// Invariant: X is next exactly on even steps.
///
/// X always opens, so after `n` plies it is X's turn iff `n` is even.
/// Jumping recomputes the flag, so this holds on every snapshot.
pub struct AlternatingTurnInvariant;

impl Invariant<TimeTravelGame> for AlternatingTurnInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.x_is_next() == (game.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "X is next exactly on even steps"
    }
}
