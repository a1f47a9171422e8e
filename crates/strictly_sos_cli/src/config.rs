//! Game configuration for the `sos` binary.

use crate::cli::GameArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_sos::{DEFAULT_BOARD_SIZE, GameSettings, Variant};
use tracing::{debug, info, instrument};

/// Who drives a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Controller {
    /// Moves are read from the terminal.
    #[default]
    Human,
    /// Moves are chosen by the automated selector.
    Computer,
}

impl Controller {
    /// Returns true for [`Controller::Computer`].
    pub fn is_automated(self) -> bool {
        matches!(self, Controller::Computer)
    }
}

/// Settings for a session, loaded from TOML and overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SosConfig {
    /// Rule variant.
    #[serde(default)]
    variant: Variant,

    /// Board side length; the engine clamps it into the supported range.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Blue seat controller.
    #[serde(default)]
    blue: Controller,

    /// Red seat controller.
    #[serde(default)]
    red: Controller,

    /// Seed for the automated selector. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Directory replay files are written to.
    #[serde(default = "default_replay_dir")]
    replay_dir: PathBuf,

    /// Write a replay file when a game finishes.
    #[serde(default)]
    record: bool,
}

#[instrument]
fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

#[instrument]
fn default_replay_dir() -> PathBuf {
    PathBuf::from("replays")
}

impl Default for SosConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            board_size: default_board_size(),
            blue: Controller::default(),
            red: Controller::default(),
            seed: None,
            replay_dir: default_replay_dir(),
            record: false,
        }
    }
}

impl SosConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(variant = %config.variant, size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line values on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, args: &GameArgs) -> Self {
        if let Some(variant) = args.variant {
            self.variant = variant;
        }
        if let Some(size) = args.size {
            self.board_size = size;
        }
        if let Some(blue) = args.blue {
            self.blue = blue;
        }
        if let Some(red) = args.red {
            self.red = red;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.record {
            self.record = true;
        }
        self
    }

    /// Game settings described by this configuration.
    pub fn settings(&self) -> GameSettings {
        GameSettings::new(
            self.variant,
            self.board_size,
            self.blue.is_automated(),
            self.red.is_automated(),
        )
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
