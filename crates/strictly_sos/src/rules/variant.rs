//! Terminal conditions for the two rule variants.

use super::super::types::Seat;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

/// Rule set deciding when a game ends.
///
/// Both variants share placement, scoring, and turn alternation; they differ
/// only in [`Variant::is_over`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Variant {
    /// The first completed sequence ends the game.
    #[default]
    Simple,
    /// Play until the board is full; most sequences wins.
    General,
}

impl Variant {
    /// Returns true when no further placements may be made.
    #[instrument(level = "trace")]
    pub fn is_over(self, blue_score: u32, red_score: u32, board_full: bool) -> bool {
        match self {
            Variant::Simple => board_full || blue_score > 0 || red_score > 0,
            Variant::General => board_full,
        }
    }
}

/// Seat with the strictly higher score, or `None` on a tie.
#[instrument(level = "trace")]
pub fn leader(blue_score: u32, red_score: u32) -> Option<Seat> {
    match blue_score.cmp(&red_score) {
        std::cmp::Ordering::Greater => Some(Seat::Blue),
        std::cmp::Ordering::Less => Some(Seat::Red),
        std::cmp::Ordering::Equal => None,
    }
}
