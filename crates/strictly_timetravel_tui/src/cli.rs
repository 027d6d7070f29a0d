//! Command-line interface for strictly_timetravel.

use crate::settings::ThemeColor;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe you can rewind
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the log file location
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Hide the key help bar
        #[arg(long)]
        no_help: bool,

        /// Winning-line highlight color
        #[arg(long)]
        highlight: Option<ThemeColor>,
    },

    /// Apply moves without a UI and print the resulting position
    Replay {
        /// Squares to play in order: indices 0-8 or labels like "center"
        moves: Vec<String>,

        /// Step to display after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            no_help: false,
            highlight: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["strictly_timetravel"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "strictly_timetravel",
            "--config",
            "game.toml",
            "replay",
            "0",
            "center",
            "--jump",
            "1",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0".to_string(), "center".to_string()],
                jump: Some(1),
                json: true,
            })
        );
    }

    #[test]
    fn test_highlight_color_parsed() {
        let cli =
            Cli::try_parse_from(["strictly_timetravel", "play", "--highlight", "yellow"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                no_help: false,
                highlight: Some(ThemeColor::Yellow),
            })
        );
    }
}
