//! Properties of a [`TimeTravelGame`](crate::TimeTravelGame) that every
//! transition preserves.
//!
//! Each invariant is a zero-sized type so sets of them can be named as
//! tuple types and checked in one call.

/// A property that must hold for a state of type `S`.
pub trait Invariant<S> {
    /// True if the property holds.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property.
    fn description() -> &'static str;

    /// [`holds`](Self::holds) as a `Result`.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation::new(Self::description()))
        }
    }
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Statement of the property that failed.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked together, implemented for tuples of
/// [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Every violation in the set, in tuple order; `Ok` when none fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [$($inv::check(state)),+]
                    .into_iter()
                    .filter_map(Result::err)
                    .collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod snapshot_lineage;
pub mod step_count;

pub use alternating_turn::AlternatingTurnInvariant;
pub use snapshot_lineage::SnapshotLineageInvariant;
pub use step_count::StepCountInvariant;

/// Everything [`PlayContract`](crate::PlayContract) verifies after a move.
pub type TimeTravelInvariants = (
    AlternatingTurnInvariant,
    StepCountInvariant,
    SnapshotLineageInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, TimeTravelGame};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = TimeTravelGame::new();
        assert!(TimeTravelInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = TimeTravelGame::new();
        for i in [0, 4, 8, 2] {
            game.play_index(i).unwrap();
        }
        assert!(TimeTravelInvariants::check_all(&game).is_ok());

        game.jump_to(1).unwrap();
        assert!(TimeTravelInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = TimeTravelGame::new();
        game.play_move(Position::Center).unwrap();

        // Wrong turn flag and an extra mark on the displayed snapshot.
        game.x_is_next = true;
        game.history.truncate(0);
        game.history.push(
            crate::Board::new()
                .with_mark(Position::Center, Player::X)
                .with_mark(Position::TopLeft, Player::X),
        );

        let violations = TimeTravelInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert_eq!(
            violations[0].to_string(),
            AlternatingTurnInvariant::description()
        );
    }

    #[test]
    fn test_single_and_pair_sets() {
        let mut game = TimeTravelGame::new();
        game.play_move(Position::Center).unwrap();
        game.x_is_next = true;

        assert!(<(StepCountInvariant,)>::check_all(&game).is_ok());
        let violations =
            <(StepCountInvariant, AlternatingTurnInvariant)>::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(AlternatingTurnInvariant::check(&game).is_err());
    }
}
