//! Game configuration loaded from an optional TOML file.

use crate::game_log::DEFAULT_LOG_FILE;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "peg_solitaire.toml";

/// How moves are chosen during a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// The player picks each move from a numbered list.
    Manual,
    /// Moves are picked uniformly at random.
    Random,
}

/// Settings read from the configuration file.
///
/// Every field is optional in the file; missing size and mode are asked
/// for interactively.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board side length.
    size: Option<usize>,

    /// Move selection mode.
    mode: Option<Mode>,

    /// Seed for random mode.
    seed: Option<u64>,

    /// Outcome log path.
    log_file: PathBuf,

    /// Whether to colour the board.
    color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: None,
            mode: None,
            seed: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            color: true,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the board size.
    pub fn with_size(mut self, size: Option<usize>) -> Self {
        if size.is_some() {
            self.size = size;
        }
        self
    }

    /// Replaces the mode.
    pub fn with_mode(mut self, mode: Option<Mode>) -> Self {
        if mode.is_some() {
            self.mode = mode;
        }
        self
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Replaces the log path.
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }

    /// Turns colour off when `no_color` is set.
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        if no_color {
            self.color = false;
        }
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
