//! Game settings: mode, who opens, and pacing between computer turns.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who sits in each seat.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
pub enum GameMode {
    /// Two humans share the input.
    #[default]
    #[value(name = "player-vs-player")]
    #[serde(rename = "player-vs-player")]
    #[strum(serialize = "player vs player")]
    PlayerVersusPlayer,
    /// A human plays Cross, the computer plays Nought.
    #[value(name = "player-vs-computer")]
    #[serde(rename = "player-vs-computer")]
    #[strum(serialize = "player vs computer")]
    PlayerVersusComputer,
    /// The computer plays both sides.
    #[value(name = "computer-vs-computer")]
    #[serde(rename = "computer-vs-computer")]
    #[strum(serialize = "computer vs computer")]
    ComputerVersusComputer,
}

/// Settings for one game, loaded from TOML or built from the command line.
///
/// ```toml
/// mode = "player-vs-computer"
/// computer_first = true
/// turn_delay_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Which seats the computer takes.
    #[serde(default)]
    mode: GameMode,

    /// In player vs computer, the computer (Nought) opens.
    #[serde(default)]
    computer_first: bool,

    /// Pause before each computer move, in milliseconds.
    #[serde(default = "default_turn_delay_ms")]
    turn_delay_ms: u64,
}

#[instrument]
fn default_turn_delay_ms() -> u64 {
    500
}

impl Settings {
    /// Creates settings.
    #[instrument]
    pub fn new(mode: GameMode, computer_first: bool, turn_delay_ms: u64) -> Self {
        Self {
            mode,
            computer_first,
            turn_delay_ms,
        }
    }

    /// Loads settings from a TOML file; missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SettingsError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            SettingsError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(mode = %settings.mode, computer_first = settings.computer_first, "Settings loaded");
        Ok(settings)
    }

    /// Replaces the mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the computer-first flag.
    pub fn with_computer_first(mut self, computer_first: bool) -> Self {
        self.computer_first = computer_first;
        self
    }

    /// Replaces the turn delay.
    pub fn with_turn_delay_ms(mut self, turn_delay_ms: u64) -> Self {
        self.turn_delay_ms = turn_delay_ms;
        self
    }

    /// Mark that moves first.
    ///
    /// Cross, unless the computer was asked to open a player vs computer
    /// game, in which case it opens as Nought.
    pub fn opening_mark(&self) -> Mark {
        if self.computer_first && self.mode == GameMode::PlayerVersusComputer {
            Mark::Nought
        } else {
            Mark::Cross
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(GameMode::default(), false, default_turn_delay_ms())
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
