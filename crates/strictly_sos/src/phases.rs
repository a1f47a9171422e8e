//! Game phase and final outcome.

use super::types::Seat;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a game.
///
/// `NotStarted → InProgress → Over`. Only `InProgress` accepts placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Created but not yet started.
    NotStarted,
    /// Accepting placements.
    InProgress,
    /// The variant's terminal condition holds. Terminal.
    Over,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A seat finished with the strictly higher score.
    Winner(Seat),
    /// Scores are level.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Winner(seat) => Some(*seat),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(seat) => write!(f, "{seat} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
