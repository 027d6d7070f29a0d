//! Strictly Timetravel - CLI entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_timetravel_tui::{
    App, Cli, Command, Settings, init_file_tracing, init_stderr_tracing, run_replay, run_tui,
};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(path) = cli.log_file {
        settings = settings.with_log_file(path);
    }

    match cli.command.unwrap_or_default() {
        Command::Play { no_help, highlight } => {
            if no_help {
                settings = settings.with_show_help(false);
            }
            if let Some(color) = highlight {
                settings = settings.with_highlight_color(color);
            }
            init_file_tracing(&settings)?;
            run_tui(App::new(settings))
        }
        Command::Replay { moves, jump, json } => {
            init_stderr_tracing();
            let mut stdout = std::io::stdout().lock();
            run_replay(&moves, jump, json, &mut stdout)?;
            Ok(())
        }
    }
}
