//! Serializable read model of a game.

use super::game::TimeTravelGame;
use super::{Position, Square};
use serde::{Deserialize, Serialize};

/// One entry of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Step index the entry jumps to.
    pub step: usize,
    /// Button label.
    pub label: String,
    /// Whether this is the displayed step.
    pub current: bool,
}

/// Everything a front end draws, recomputed from the game on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Displayed board, row-major.
    pub squares: [Square; 9],
    /// Status line, e.g. `Next player: X`.
    pub status: String,
    /// The displayed step.
    pub turns: usize,
    /// Winning line on the displayed board; empty without a winner.
    pub winning_line: Vec<Position>,
    /// History list, oldest first.
    pub history: Vec<HistoryItem>,
}

impl From<&TimeTravelGame> for GameView {
    fn from(game: &TimeTravelGame) -> Self {
        let step = game.step_number();
        Self {
            squares: *game.current().squares(),
            status: game.status().to_string(),
            turns: step,
            winning_line: game
                .winner()
                .map(|win| win.line().to_vec())
                .unwrap_or_default(),
            history: game
                .history()
                .labels()
                .map(|(index, label)| HistoryItem {
                    step: index,
                    label,
                    current: index == step,
                })
                .collect(),
        }
    }
}
