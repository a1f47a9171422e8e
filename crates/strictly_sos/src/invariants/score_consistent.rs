//! Score consistency invariant: scores are earned only by one's own placements.

use super::super::{GameState, Seat};
use super::{Invariant, replay_ledger};

/// Invariant: each seat's score equals the sequences its own placements
/// completed.
///
/// Replays the ledger, crediting each entry's completed sequences to the
/// seat that placed it.
pub struct ScoreConsistentInvariant;

impl Invariant<GameState> for ScoreConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let Some((_, scored)) = replay_ledger(game.board_size(), game.ledger().entries()) else {
            return false;
        };

        let (mut blue, mut red) = (0u32, 0u32);
        for (entry, points) in scored {
            match entry.seat {
                Seat::Blue => blue += points,
                Seat::Red => red += points,
            }
        }

        blue == game.score(Seat::Blue) && red == game.score(Seat::Red)
    }

    fn description() -> &'static str {
        "Scores equal the sequences completed by each seat's placements"
    }
}
