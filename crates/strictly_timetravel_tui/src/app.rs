//! Application state and logic.

use crate::input::{Action, Direction, move_cursor};
use crate::settings::Settings;
use strictly_timetravel::{Position, TimeTravelGame};
use tracing::{debug, info, instrument};

/// Which pane receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The history list.
    History,
}

/// Main application state.
///
/// Owns the one game of the session. Everything on screen is derived
/// from it at draw time.
#[derive(Debug, Clone)]
pub struct App {
    game: TimeTravelGame,
    settings: Settings,
    cursor: Position,
    focus: Focus,
    selected: usize,
    running: bool,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new(settings: Settings) -> Self {
        Self {
            game: TimeTravelGame::new(),
            settings,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &TimeTravelGame {
        &self.game
    }

    /// Gets the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// False once the user has asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one user action.
    #[instrument(skip(self), fields(step = self.game.step_number()))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Square(position) => {
                self.cursor = position;
                self.play(position);
            }
            Action::Jump(step) => self.jump(step),
            Action::Move(direction) => self.move_in_focus(direction),
            Action::Select => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump(self.selected),
            },
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.game.step_number();
                debug!(focus = ?self.focus, "Focus changed");
            }
            Action::StepBack => {
                if let Some(step) = self.game.step_number().checked_sub(1) {
                    self.jump(step);
                }
            }
            Action::StepForward => {
                let step = self.game.step_number() + 1;
                if step < self.game.history().len() {
                    self.jump(step);
                }
            }
            Action::Quit => {
                info!("Quit requested");
                self.running = false;
            }
        }
    }

    fn play(&mut self, position: Position) {
        // Rejections are logged by the game; the screen simply stays put.
        if self.game.play_move(position).is_ok() {
            self.selected = self.game.step_number();
        }
    }

    fn jump(&mut self, step: usize) {
        if self.game.jump_to(step).is_ok() {
            self.selected = step;
        }
    }

    fn move_in_focus(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                let last = self.game.history().len() - 1;
                self.selected = match direction {
                    Direction::Up => self.selected.saturating_sub(1),
                    Direction::Down => (self.selected + 1).min(last),
                    Direction::Left | Direction::Right => self.selected,
                };
            }
        }
    }
}
