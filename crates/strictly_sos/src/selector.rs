//! Automated move selection.
//!
//! Four tiers, evaluated in order; the first one that yields a move wins:
//!
//! 1. **Opening**: on an empty board, a random cell and a random symbol.
//! 2. **Scoring**: the placement completing the most sequences, if any
//!    completes at least one.
//! 3. **Defensive**: a random choice among non-scoring placements after
//!    which the opponent has no scoring reply anywhere on the board. This
//!    looks exactly one ply ahead.
//! 4. **Fallback**: a random cell and a random symbol.

use super::action::Move;
use super::state::GameState;
use super::types::{Position, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Which tier produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Tier {
    /// Random first move of the game.
    Opening,
    /// Completes the most sequences available.
    Scoring,
    /// Leaves the opponent no immediate sequence.
    Defensive,
    /// Last resort random move.
    Fallback,
}

/// A chosen move and the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Move to play.
    pub mv: Move,
    /// Tier that produced it.
    pub tier: Tier,
}

/// Picks moves for automated seats.
///
/// Owns its random source so games can be reproduced by seeding.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    rng: StdRng,
}

impl MoveSelector {
    /// Selector seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic selector.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses a move for the seat to move in `game`.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty cell. Callers must only ask for a
    /// move while the game is not over.
    #[instrument(skip_all, fields(seat = %game.current_turn(), filled = game.ledger().len()))]
    pub fn choose(&mut self, game: &GameState) -> Decision {
        let empty = game.empty_positions();
        assert!(
            !empty.is_empty(),
            "move selector invoked on a full board"
        );

        if game.ledger().is_empty() {
            let mv = self.random_move(&empty);
            debug!(%mv, "Opening move");
            return Decision { mv, tier: Tier::Opening };
        }

        let candidates = candidates(&empty);

        if let Some((mv, count)) = best_scoring(game, &candidates) {
            debug!(%mv, count, "Scoring move");
            return Decision { mv, tier: Tier::Scoring };
        }

        let defensive = defensive_moves(game, &candidates);
        if !defensive.is_empty() {
            let mv = defensive[self.rng.random_range(0..defensive.len())];
            debug!(%mv, options = defensive.len(), "Defensive move");
            return Decision { mv, tier: Tier::Defensive };
        }

        let mv = self.random_move(&empty);
        debug!(%mv, "No safe move, playing at random");
        Decision { mv, tier: Tier::Fallback }
    }

    fn random_move(&mut self, empty: &[Position]) -> Move {
        let position = empty[self.rng.random_range(0..empty.len())];
        let symbol = Symbol::PLACEABLE[self.rng.random_range(0..Symbol::PLACEABLE.len())];
        Move::new(symbol, position)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Every empty cell with each placeable symbol, row-major, `S` before `O`.
fn candidates(empty: &[Position]) -> Vec<Move> {
    empty
        .iter()
        .flat_map(|pos| Symbol::PLACEABLE.map(|symbol| Move::new(symbol, *pos)))
        .collect()
}

/// First candidate completing the most sequences, if that is more than zero.
fn best_scoring(game: &GameState, candidates: &[Move]) -> Option<(Move, usize)> {
    let mut best: Option<(Move, usize)> = None;
    for mv in candidates {
        let count = game.would_complete(*mv);
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((*mv, count));
        }
    }
    best
}

/// Non-scoring candidates after which no empty cell lets the opponent score.
fn defensive_moves(game: &GameState, candidates: &[Move]) -> Vec<Move> {
    candidates
        .iter()
        .copied()
        .filter(|mv| game.would_complete(*mv) == 0)
        .filter(|mv| {
            let mut probe = game.clone();
            if probe.place(*mv).is_err() {
                return false;
            }
            !opponent_can_score(&probe)
        })
        .collect()
}

fn opponent_can_score(probe: &GameState) -> bool {
    probe.empty_positions().into_iter().any(|pos| {
        Symbol::PLACEABLE
            .iter()
            .any(|symbol| probe.would_complete(Move::new(*symbol, pos)) > 0)
    })
}
