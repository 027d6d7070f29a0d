//! Terminal lifecycle and the event loop.
//!
//! The only module with terminal side effects. Each input event is
//! mapped to an action, applied to the app, and the screen is redrawn
//! from scratch before the next event is read.

use crate::app::App;
use crate::input::{map_key, map_mouse};
use crate::ui::{self, AppLayout};
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{debug, error, info, instrument, warn};

/// Raw mode plus the alternate screen. Dropping it restores the
/// terminal, including when setup fails or the event loop panics.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to leave raw mode");
        }
        if let Err(err) = execute!(
            self.out,
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        ) {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(app: App) -> Result<()> {
    info!("Starting Strictly Timetravel TUI");

    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("TUI exited");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let mut layout: Option<AppLayout> = None;

    while app.is_running() {
        terminal.draw(|frame| layout = Some(ui::draw(frame, &app)))?;

        let action = match event::read()? {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => layout.as_ref().and_then(|l| map_mouse(mouse, l)),
            // Resize and focus events just trigger a redraw.
            _ => None,
        };

        if let Some(action) = action {
            debug!(?action, "Dispatching");
            app.handle(action);
        }
    }

    Ok(())
}
