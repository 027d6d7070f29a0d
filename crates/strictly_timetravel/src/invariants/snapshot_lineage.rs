//! Snapshot lineage invariant: each snapshot extends its predecessor.

use super::super::{Board, Player, Square, TimeTravelGame};
use super::Invariant;

/// Invariant: snapshots form one unbroken line of play.
///
/// The first snapshot is the empty board, and snapshot `k + 1` equals
/// snapshot `k` plus a single newly occupied square holding the mark of
/// ply `k`. Squares are never overwritten.
pub struct SnapshotLineageInvariant;

impl SnapshotLineageInvariant {
    fn extends(prev: &Board, next: &Board, mover: Player) -> bool {
        let mut added = 0;
        for (a, b) in prev.squares().iter().zip(next.squares()) {
            if a == b {
                continue;
            }
            if *a != Square::Empty || *b != Square::Occupied(mover) {
                return false;
            }
            added += 1;
        }
        added == 1
    }
}

impl Invariant<TimeTravelGame> for SnapshotLineageInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        let snapshots = game.history().snapshots();

        if snapshots.first() != Some(&Board::new()) {
            return false;
        }

        snapshots
            .windows(2)
            .enumerate()
            .all(|(ply, pair)| Self::extends(&pair[0], &pair[1], Player::for_ply(ply)))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark of the right player"
    }
}
