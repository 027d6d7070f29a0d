//! Headless replay: apply moves and print the resulting position.

use anyhow::{Context, Result, anyhow};
use std::io::Write;
use strictly_timetravel::{Position, TimeTravelGame};
use tracing::{info, instrument};

/// Plays `moves` from the empty board, optionally jumps, and writes the view.
///
/// Unknown squares abort the replay. Illegal moves are skipped; the game
/// logs each one as a warning, the same way the TUI ignores them.
#[instrument(skip(out))]
pub fn run_replay(
    moves: &[String],
    jump: Option<usize>,
    json: bool,
    out: &mut impl Write,
) -> Result<TimeTravelGame> {
    let mut game = TimeTravelGame::new();

    for token in moves {
        let position = Position::from_label_or_number(token)
            .ok_or_else(|| anyhow!("Unknown square {:?} (use 0-8 or a label like \"center\")", token))?;
        // Rejections are already logged by the game.
        let _ = game.play_move(position);
    }

    if let Some(step) = jump {
        game.jump_to(step).context("Invalid --jump")?;
    }

    info!(step = game.step_number(), history_len = game.history().len(), "Replay finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &game.view())?;
        writeln!(out)?;
    } else {
        write_text(&game, out)?;
    }
    Ok(game)
}

fn write_text(game: &TimeTravelGame, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", game.current().display())?;
    writeln!(out)?;
    writeln!(out, "{}", game.status())?;
    writeln!(out, "Turns: {}", game.step_number())?;
    if let Some(win) = game.winner() {
        let line: Vec<String> = win.line().iter().map(|p| p.to_index().to_string()).collect();
        writeln!(out, "Winning line: {}", line.join(", "))?;
    }
    writeln!(out, "History:")?;
    for (index, label) in game.history().labels() {
        let marker = if index == game.step_number() { '>' } else { ' ' };
        writeln!(out, "{} {}", marker, label)?;
    }
    Ok(())
}
