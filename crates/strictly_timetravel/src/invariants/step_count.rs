//! Step count invariant: the displayed snapshot holds one mark per ply.

use super::super::TimeTravelGame;
use super::Invariant;

/// Invariant: `history[step]` has exactly `step` occupied squares.
pub struct StepCountInvariant;

impl Invariant<TimeTravelGame> for StepCountInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.history()
            .get(game.step_number())
            .is_some_and(|board| board.occupied_count() == game.step_number())
    }

    fn description() -> &'static str {
        "Displayed snapshot has one mark per step"
    }
}
