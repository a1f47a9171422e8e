//! Replay files on disk.
//!
//! Files are JSON [`GameRecord`]s named
//! `{YYYY-mm-dd-HH-MM-SS-mmm}-{Variant}-B{blue automated}R{red automated}.replay`.

use chrono::{DateTime, Local, TimeZone};
use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use strictly_sos::{GameRecord, GameSettings};
use tracing::{debug, info, instrument};

/// Extension used for replay files.
pub const REPLAY_EXTENSION: &str = "replay";

/// Replay file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay file error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// File name for a game with `settings` finished at `at`.
pub fn replay_file_name<Tz: TimeZone>(settings: &GameSettings, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}-{}-B{}R{}.{}",
        at.format("%Y-%m-%d-%H-%M-%S-%3f"),
        settings.variant(),
        settings.blue_automated(),
        settings.red_automated(),
        REPLAY_EXTENSION
    )
}

/// Writes `record` into `dir`, named for the current local time.
pub fn save(dir: &Path, record: &GameRecord) -> Result<PathBuf, StoreError> {
    save_at(dir, record, &Local::now())
}

/// Writes `record` into `dir`, named for `at`. Creates `dir` if needed.
#[instrument(skip(dir, record, at), fields(dir = %dir.display(), turns = record.len()))]
pub fn save_at<Tz: TimeZone>(
    dir: &Path,
    record: &GameRecord,
    at: &DateTime<Tz>,
) -> Result<PathBuf, StoreError>
where
    Tz::Offset: std::fmt::Display,
{
    std::fs::create_dir_all(dir)?;
    let path = dir.join(replay_file_name(record.settings(), at));
    std::fs::write(&path, record.to_json()?)?;
    info!(path = %path.display(), "Replay saved");
    Ok(path)
}

/// Reads a replay file.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<GameRecord, StoreError> {
    debug!("Loading replay");
    let json = std::fs::read_to_string(path)
        .map_err(|e| StoreError::new(format!("Failed to read {}: {}", path.display(), e)))?;
    let record = GameRecord::from_json(&json)?;
    debug!(turns = record.len(), "Replay loaded");
    Ok(record)
}
