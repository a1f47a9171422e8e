//! Computer-vs-computer batches.

use derive_getters::Getters;
use strictly_sos::{Game, GameSettings, MoveSelector, Outcome, Seat, Variant};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games Blue won.
    blue: usize,
    /// Games Red won.
    red: usize,
    /// Drawn games.
    draws: usize,
}

impl Tally {
    /// Counts one finished game.
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Seat::Blue) => self.blue += 1,
            Outcome::Winner(Seat::Red) => self.red += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Games counted.
    pub fn total(&self) -> usize {
        self.blue + self.red + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: Blue {}, Red {}, draws {}",
            self.total(),
            self.blue,
            self.red,
            self.draws
        )
    }
}

/// Plays `games` games with both seats automated.
///
/// With a seed, game `i` uses `seed + i` so the batch is reproducible.
#[instrument]
pub fn simulate(variant: Variant, board_size: usize, games: usize, seed: Option<u64>) -> Tally {
    let settings = GameSettings::new(variant, board_size, true, true);
    let mut tally = Tally::default();

    for index in 0..games {
        let selector = match seed {
            Some(seed) => MoveSelector::seeded(seed.wrapping_add(index as u64)),
            None => MoveSelector::from_entropy(),
        };
        let mut game = Game::with_selector(settings, selector);
        if game.start().is_err() {
            continue;
        }
        if let Some(outcome) = game.outcome() {
            debug!(index, %outcome, "Simulated game finished");
            tally.add(outcome);
        }
    }

    info!(%tally, "Simulation complete");
    tally
}
