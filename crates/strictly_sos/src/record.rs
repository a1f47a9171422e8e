//! Game records for saving and replaying finished games.
//!
//! A [`GameRecord`] is the settings a game was created with plus every
//! [`TurnOutcome`] it broadcast, in order. Replaying feeds the recorded
//! placements back through a fresh game with both seats human, so the
//! automated seats are not consulted and the result is deterministic.

use super::action::{PlacementError, SessionError, TurnOutcome};
use super::game::Game;
use super::selector::MoveSelector;
use super::state::GameSettings;
use super::types::Seat;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Settings plus the ordered turn history of one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// How the game was created.
    settings: GameSettings,
    /// Every accepted placement, in order.
    turns: Vec<TurnOutcome>,
}

/// Why a record could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// The replay game refused to start.
    #[display("Replay could not start: {_0}")]
    Session(SessionError),

    /// A recorded placement was rejected by the rules.
    #[display("Turn {index} was rejected: {source}")]
    Rejected {
        /// Zero-based turn index.
        index: usize,
        /// Rule that rejected it.
        source: PlacementError,
    },

    /// The record credits a turn to the seat that was not on move.
    #[display("Turn {index} is recorded for {recorded}, but {expected} was to move")]
    WrongSeat {
        /// Zero-based turn index.
        index: usize,
        /// Seat on move during replay.
        expected: Seat,
        /// Seat stored in the record.
        recorded: Seat,
    },

    /// Replaying a turn completed a different number of sequences.
    #[display("Turn {index} completed {actual} sequences, record says {expected}")]
    Diverged {
        /// Zero-based turn index.
        index: usize,
        /// Count stored in the record.
        expected: usize,
        /// Count produced during replay.
        actual: usize,
    },
}

impl GameRecord {
    /// Creates a record.
    pub fn new(settings: GameSettings, turns: Vec<TurnOutcome>) -> Self {
        Self { settings, turns }
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if no turn was recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Plays every recorded turn through a fresh game with both seats human.
    ///
    /// Each turn must be credited to the seat on move and must complete the
    /// same number of sequences it did originally.
    #[instrument(skip(self), fields(turns = self.turns.len(), variant = %self.settings.variant()))]
    pub fn replay(&self) -> Result<Game, ReplayError> {
        self.replay_with(|_, _| {})
    }

    /// Like [`GameRecord::replay`], calling `on_turn` with the game after
    /// each replayed turn.
    pub fn replay_with(
        &self,
        mut on_turn: impl FnMut(usize, &Game),
    ) -> Result<Game, ReplayError> {
        let mut game = Game::with_selector(self.settings.all_human(), MoveSelector::seeded(0));
        game.start().map_err(ReplayError::Session)?;

        for (index, turn) in self.turns.iter().enumerate() {
            let expected = game.current_turn();
            if turn.seat != expected {
                warn!(index, %expected, recorded = %turn.seat, "Record out of turn order");
                return Err(ReplayError::WrongSeat {
                    index,
                    expected,
                    recorded: turn.seat,
                });
            }

            let placed = turn.placed;
            let outcome = game
                .try_place_tile(placed.position.row, placed.position.col, placed.symbol)
                .map_err(|source| ReplayError::Rejected { index, source })?;

            if outcome.sequences.len() != turn.sequences.len() {
                return Err(ReplayError::Diverged {
                    index,
                    expected: turn.sequences.len(),
                    actual: outcome.sequences.len(),
                });
            }
            debug!(index, %outcome, "Replayed turn");
            on_turn(index, &game);
        }

        info!(outcome = ?game.outcome(), "Replay finished");
        Ok(game)
    }
}

/// Collects turn outcomes from a [`Game`] into a [`GameRecord`].
///
/// Attach before `start` so automated opening moves are captured.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    turns: Rc<RefCell<Vec<TurnOutcome>>>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes this recorder to `game`.
    pub fn attach(&self, game: &mut Game) {
        let turns = Rc::clone(&self.turns);
        game.subscribe(move |outcome| turns.borrow_mut().push(outcome.clone()));
    }

    /// Turns captured so far.
    pub fn len(&self) -> usize {
        self.turns.borrow().len()
    }

    /// Returns true if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.turns.borrow().is_empty()
    }

    /// Builds a record from the captured turns.
    pub fn finish(&self, settings: GameSettings) -> GameRecord {
        GameRecord::new(settings, self.turns.borrow().clone())
    }
}
