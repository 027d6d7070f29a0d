//! User settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_timetravel.toml";

/// A named terminal color usable in the theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ThemeColor {
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Cyan.
    Cyan,
    /// Magenta.
    Magenta,
    /// White.
    White,
    /// Gray.
    Gray,
    /// Dark gray.
    DarkGray,
}

impl From<ThemeColor> for Color {
    fn from(color: ThemeColor) -> Self {
        match color {
            ThemeColor::Blue => Color::Blue,
            ThemeColor::Red => Color::Red,
            ThemeColor::Green => Color::Green,
            ThemeColor::Yellow => Color::Yellow,
            ThemeColor::Cyan => Color::Cyan,
            ThemeColor::Magenta => Color::Magenta,
            ThemeColor::White => Color::White,
            ThemeColor::Gray => Color::Gray,
            ThemeColor::DarkGray => Color::DarkGray,
        }
    }
}

/// Colors used by the board and history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Theme {
    /// Color of X marks.
    #[serde(default = "default_x_color")]
    x_color: ThemeColor,

    /// Color of O marks.
    #[serde(default = "default_o_color")]
    o_color: ThemeColor,

    /// Background of squares on the winning line.
    #[serde(default = "default_highlight_color")]
    highlight_color: ThemeColor,
}

fn default_x_color() -> ThemeColor {
    ThemeColor::Blue
}

fn default_o_color() -> ThemeColor {
    ThemeColor::Red
}

fn default_highlight_color() -> ThemeColor {
    ThemeColor::Green
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            highlight_color: default_highlight_color(),
        }
    }
}

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Where the TUI writes its log (the terminal itself is taken).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show the key help bar.
    #[serde(default = "default_show_help")]
    show_help: bool,

    /// Colors.
    #[serde(default)]
    theme: Theme,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_timetravel.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_help() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_help: default_show_help(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(log_file = %settings.log_file.display(), "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves settings for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// the working directory is used when present, and defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Turns the help bar on or off.
    pub fn with_show_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Replaces the winning-line highlight color.
    pub fn with_highlight_color(mut self, color: ThemeColor) -> Self {
        self.theme.highlight_color = color;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
