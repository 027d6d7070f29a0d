//! Terminal front end for Strictly Timetravel.
//!
//! - **App**: owns the session's game plus cursor and focus
//! - **Input**: key and mouse events to actions
//! - **UI**: stateless ratatui rendering and click hit-testing
//! - **Replay**: headless command that prints a position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod logging;
mod replay;
mod settings;
mod terminal;
mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use input::{Action, Direction, map_key, map_mouse, move_cursor};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use replay::run_replay;
pub use settings::{ConfigError, DEFAULT_CONFIG_FILE, Settings, Theme, ThemeColor};
pub use terminal::run_tui;
pub use ui::{AppLayout, draw};
