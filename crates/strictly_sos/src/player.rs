//! Per-seat identity and score.

use super::types::Seat;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Which seat this player occupies.
    seat: Seat,
    /// Sequences completed so far.
    score: u32,
    /// Driven by the move selector instead of a person.
    automated: bool,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(seat: Seat, automated: bool) -> Self {
        Self {
            seat,
            score: 0,
            automated,
        }
    }

    /// Human-controlled player.
    pub fn human(seat: Seat) -> Self {
        Self::new(seat, false)
    }

    /// Selector-controlled player.
    pub fn computer(seat: Seat) -> Self {
        Self::new(seat, true)
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.score += points;
    }
}
