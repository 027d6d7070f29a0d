//! The time-travel game state machine.
//!
//! A [`TimeTravelGame`] owns the snapshot history plus a cursor into it.
//! Only [`TimeTravelGame::play_move`] and [`TimeTravelGame::jump_to`]
//! mutate it; everything else is derived from the displayed snapshot.

use super::contracts::{Contract, PlayContract};
use super::error::MoveError;
use super::history::History;
use super::invariants::{InvariantSet, TimeTravelInvariants};
use super::rules::{GameStatus, Win, derive_status, evaluate};
use super::view::GameView;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe with a browsable snapshot history.
///
/// Deserializing goes through the same checks as a move: the history
/// must be a legal line of play from the empty board and the cursor and
/// turn flag must agree with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct TimeTravelGame {
    pub(crate) history: History,
    pub(crate) step_number: usize,
    pub(crate) x_is_next: bool,
}

impl TimeTravelGame {
    /// Creates a game at the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step_number: 0,
            x_is_next: true,
        }
    }

    /// Places the next player's mark at `position`.
    ///
    /// Any snapshots after the displayed step are discarded first, so a
    /// move made after [`jump_to`](Self::jump_to) starts a new branch.
    /// Illegal moves are logged and rejected without touching the state.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn play_move(&mut self, position: Position) -> Result<(), MoveError> {
        if let Err(e) = PlayContract::pre(self, &position) {
            warn!(%position, error = %e, "Illegal move");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();
        let player = self.next_player();
        let next = self.current().with_mark(position, player);

        self.history.truncate(self.step_number);
        self.history.push(next);
        self.step_number = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        // Postconditions are verified in debug builds only.
        #[cfg(debug_assertions)]
        {
            if let Err(e) = PlayContract::post(&before, self) {
                warn!(error = %e, "Postcondition failed, rolling back");
                *self = before;
                return Err(e);
            }
        }

        debug!(
            %player,
            %position,
            step = self.step_number,
            history_len = self.history.len(),
            "Move applied"
        );
        Ok(())
    }

    /// Places a mark by raw board index (0-8).
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<(), MoveError> {
        match Position::from_index(index) {
            Some(position) => self.play_move(position),
            None => {
                warn!(index, "Illegal move");
                Err(MoveError::OutOfBounds(index))
            }
        }
    }

    /// Displays the snapshot at `step` without discarding anything.
    ///
    /// The turn flag is recomputed from the step's parity.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Jump outside history");
            return Err(MoveError::StepOutOfRange { step, len });
        }

        self.step_number = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "Jumped");
        Ok(())
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Board {
        &self.history.snapshots()[self.step_number]
    }

    /// All snapshots, including any future beyond the displayed step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot; also the number of plies on it.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The player who places the next mark.
    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Completed line on the displayed snapshot, if any.
    pub fn winner(&self) -> Option<Win> {
        evaluate(self.current())
    }

    /// Status for the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        derive_status(self.current(), self.step_number, self.x_is_next)
    }

    /// Returns true if the displayed snapshot accepts no more moves.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Empty squares on the displayed snapshot, or none once it is won.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current())
        }
    }

    /// Serializable snapshot of everything a front end shows.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

/// Unchecked wire shape of a [`TimeTravelGame`].
#[derive(Deserialize)]
struct GameRecord {
    history: HistoryRecord,
    step_number: usize,
    x_is_next: bool,
}

#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vec<Board>,
}

impl TryFrom<GameRecord> for TimeTravelGame {
    type Error = MoveError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let len = record.history.snapshots.len();
        if record.step_number >= len {
            return Err(MoveError::StepOutOfRange {
                step: record.step_number,
                len,
            });
        }

        let game = Self {
            history: History {
                snapshots: record.history.snapshots,
            },
            step_number: record.step_number,
            x_is_next: record.x_is_next,
        };
        TimeTravelInvariants::check_all(&game).map_err(MoveError::from)?;
        Ok(game)
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}
