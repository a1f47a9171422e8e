//! Monotonic grid invariant: cells never change once set.

use super::super::GameState;
use super::{Invariant, replay_ledger};

/// Invariant: grid cells are monotonic (never overwritten).
///
/// Once a cell transitions from empty to `S` or `O`, it never changes.
/// This is verified by replaying the ledger and comparing, which also
/// pins the ledger length to the number of filled cells.
pub struct MonotonicGridInvariant;

impl Invariant<GameState> for MonotonicGridInvariant {
    fn holds(game: &GameState) -> bool {
        match replay_ledger(game.board_size(), game.ledger().entries()) {
            Some((rebuilt, _)) => rebuilt == *game.grid(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "Grid cells are monotonic and match the ledger"
    }
}
