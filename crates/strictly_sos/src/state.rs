//! The clonable game core: grid, ledger, players, and turn.
//!
//! [`GameState`] holds everything the rules need and nothing else. It has
//! no subscribers and no random source, so a plain `clone()` is the
//! independent lookahead copy the move selector probes.

use super::action::{Move, PlacementError, TurnOutcome};
use super::contracts::LegalPlacement;
use super::grid::Grid;
use super::ledger::{LedgerEntry, TurnLedger};
use super::phases::{Outcome, Phase};
use super::player::Player;
use super::rules::sequence::count_completed;
use super::rules::variant::leader;
use super::rules::{Variant, completed_sequences};
use super::types::{Position, Seat, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Parameters a game is created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Rule variant.
    variant: Variant,
    /// Requested side length (clamped by the grid).
    board_size: usize,
    /// Blue seat is driven by the move selector.
    blue_automated: bool,
    /// Red seat is driven by the move selector.
    red_automated: bool,
}

impl GameSettings {
    /// Creates game settings.
    pub fn new(variant: Variant, board_size: usize, blue_automated: bool, red_automated: bool) -> Self {
        Self {
            variant,
            board_size,
            blue_automated,
            red_automated,
        }
    }

    /// Same settings with both seats human.
    pub fn all_human(self) -> Self {
        Self {
            blue_automated: false,
            red_automated: false,
            ..self
        }
    }
}

/// Complete rule state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    variant: Variant,
    grid: Grid,
    ledger: TurnLedger,
    blue: Player,
    red: Player,
    current_turn: Seat,
    started: bool,
}

impl GameState {
    /// Creates a game that has not been started. Blue moves first.
    #[instrument]
    pub fn new(variant: Variant, board_size: usize, blue_automated: bool, red_automated: bool) -> Self {
        Self {
            variant,
            grid: Grid::new(board_size),
            ledger: TurnLedger::new(),
            blue: Player::new(Seat::Blue, blue_automated),
            red: Player::new(Seat::Red, red_automated),
            current_turn: Seat::Blue,
            started: false,
        }
    }

    /// Creates a game from settings.
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(
            settings.variant,
            settings.board_size,
            settings.blue_automated,
            settings.red_automated,
        )
    }

    /// Settings this game was created with (board size after clamping).
    pub fn settings(&self) -> GameSettings {
        GameSettings::new(
            self.variant,
            self.grid.size(),
            *self.blue.automated(),
            *self.red.automated(),
        )
    }

    pub(crate) fn mark_started(&mut self) {
        self.started = true;
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Rule variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.grid.size()
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placement history.
    pub fn ledger(&self) -> &TurnLedger {
        &self.ledger
    }

    /// Seat to move next.
    pub fn current_turn(&self) -> Seat {
        self.current_turn
    }

    /// Returns true once `start` has been called.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Blue => &self.blue,
            Seat::Red => &self.red,
        }
    }

    pub(crate) fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Blue => &mut self.blue,
            Seat::Red => &mut self.red,
        }
    }

    /// Score of `seat`.
    pub fn score(&self, seat: Seat) -> u32 {
        *self.player(seat).score()
    }

    /// Returns true if the seat to move is driven by the selector.
    pub fn is_current_seat_automated(&self) -> bool {
        *self.player(self.current_turn).automated()
    }

    /// Returns true once every cell has been filled.
    pub fn is_board_full(&self) -> bool {
        self.ledger.len() >= self.grid.size() * self.grid.size()
    }

    /// The variant's terminal predicate.
    pub fn is_game_over(&self) -> bool {
        self.variant.is_over(
            self.score(Seat::Blue),
            self.score(Seat::Red),
            self.is_board_full(),
        )
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.is_game_over() {
            Phase::Over
        } else {
            Phase::InProgress
        }
    }

    /// Final outcome, or `None` while the game is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }
        Some(match leader(self.score(Seat::Blue), self.score(Seat::Red)) {
            Some(seat) => Outcome::Winner(seat),
            None => Outcome::Draw,
        })
    }

    /// Winning seat. `None` on a draw or while the game is running.
    pub fn winner(&self) -> Option<Seat> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// All empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.grid.empty_positions()
    }

    /// Number of sequences `mv` would complete, without placing it.
    pub fn would_complete(&self, mv: Move) -> usize {
        count_completed(&self.grid, mv.position, mv.symbol)
    }

    /// Checks whether `mv` would be accepted right now.
    pub fn check(&self, mv: &Move) -> Result<(), PlacementError> {
        LegalPlacement::check(mv, self)
    }

    /// Places a tile for the current seat.
    ///
    /// On success the symbol is written, the ledger grows by one, the seat
    /// is credited one point per completed sequence, and the turn passes to
    /// the opponent only if nothing was completed. On rejection nothing
    /// changes.
    #[instrument(level = "debug", skip(self), fields(seat = %self.current_turn))]
    pub fn place(&mut self, mv: Move) -> Result<TurnOutcome, PlacementError> {
        self.check(&mv)?;

        let seat = self.current_turn;
        let Position { row, col } = mv.position;
        self.grid.set(row, col, mv.symbol);
        self.ledger.push(LedgerEntry::new(seat, mv.position, mv.symbol));

        let sequences = completed_sequences(&self.grid, mv.position, mv.symbol);
        if sequences.is_empty() {
            self.current_turn = seat.opponent();
        } else {
            self.player_mut(seat).award(sequences.len() as u32);
            debug!(count = sequences.len(), "Sequences completed, seat keeps the turn");
        }

        Ok(TurnOutcome::new(mv, sequences, seat))
    }

    /// Convenience for [`GameState::place`] with raw coordinates.
    pub fn place_at(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<TurnOutcome, PlacementError> {
        self.place(Move::new(symbol, Position::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(variant: Variant, size: usize) -> GameState {
        let mut state = GameState::new(variant, size, false, false);
        state.mark_started();
        state
    }

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new(Variant::General, 5, false, true);
        assert_eq!(state.current_turn(), Seat::Blue);
        assert_eq!(state.board_size(), 5);
        assert_eq!(state.phase(), Phase::NotStarted);
        assert!(*state.player(Seat::Red).automated());
        assert_eq!(state.score(Seat::Blue), 0);
    }

    #[test]
    fn test_placement_before_start_rejected() {
        let mut state = GameState::new(Variant::Simple, 3, false, false);
        assert_eq!(state.place_at(0, 0, Symbol::S), Err(PlacementError::NotStarted));
        assert!(state.ledger().is_empty());
    }

    #[test]
    fn test_non_scoring_move_flips_turn() {
        let mut state = started(Variant::General, 3);
        let outcome = state.place_at(1, 1, Symbol::O).unwrap();
        assert!(!outcome.scored());
        assert_eq!(outcome.seat, Seat::Blue);
        assert_eq!(state.current_turn(), Seat::Red);
    }

    #[test]
    fn test_scoring_move_keeps_turn() {
        let mut state = started(Variant::General, 3);
        state.place_at(0, 0, Symbol::S).unwrap(); // Blue
        state.place_at(0, 2, Symbol::S).unwrap(); // Red
        let outcome = state.place_at(0, 1, Symbol::O).unwrap(); // Blue
        assert_eq!(outcome.points(), 1);
        assert_eq!(state.current_turn(), Seat::Blue);
        assert_eq!(state.score(Seat::Blue), 1);
        assert_eq!(state.score(Seat::Red), 0);
    }

    #[test]
    fn test_multi_sequence_scores_each() {
        let mut state = started(Variant::General, 3);
        // Corners and edge midpoints as S, then O in the middle closes four runs.
        let moves = [(0, 0), (2, 2), (0, 2), (2, 0), (0, 1), (2, 1), (1, 0), (1, 2)];
        for (row, col) in moves {
            state.place_at(row, col, Symbol::S).unwrap();
        }
        let seat = state.current_turn();
        let outcome = state.place_at(1, 1, Symbol::O).unwrap();
        assert_eq!(outcome.points(), 4);
        assert_eq!(state.score(seat), 4);
        assert!(state.is_board_full());
        assert!(state.is_game_over());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = started(Variant::General, 4);
        state.place_at(0, 0, Symbol::S).unwrap();
        let snapshot = state.clone();
        let mut probe = state.clone();
        probe.place_at(0, 1, Symbol::O).unwrap();
        probe.place_at(0, 2, Symbol::S).unwrap();
        assert_eq!(state, snapshot);
        assert_ne!(probe, snapshot);
    }

    #[test]
    fn test_would_complete_does_not_mutate() {
        let mut state = started(Variant::Simple, 3);
        state.place_at(0, 0, Symbol::S).unwrap();
        state.place_at(0, 1, Symbol::O).unwrap();
        let before = state.clone();
        assert_eq!(state.would_complete(Move::new(Symbol::S, Position::new(0, 2))), 1);
        assert_eq!(state.would_complete(Move::new(Symbol::O, Position::new(0, 2))), 0);
        assert_eq!(state, before);
    }
}
