//! Game session controller.
//!
//! [`Game`] wraps a [`GameState`] with the pieces that must not be cloned
//! into lookahead probes: the outcome subscribers and the move selector.

use super::action::{Move, PlacementError, SessionError, TurnOutcome};
#[cfg(debug_assertions)]
use super::contracts::{Contract, PlacementContract};
use super::grid::Grid;
use super::notify::ChangeNotifier;
use super::phases::{Outcome, Phase};
use super::rules::Variant;
use super::selector::MoveSelector;
use super::state::{GameSettings, GameState};
use super::types::{Position, Seat, Symbol};
use tracing::{debug, info, instrument, warn};

/// An SOS game with subscribers and automated seats.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    selector: MoveSelector,
    notifier: ChangeNotifier,
}

impl Game {
    /// Creates a game that has not been started.
    ///
    /// Automated seats draw from an entropy-seeded selector.
    #[instrument]
    pub fn create_new_game(
        variant: Variant,
        board_size: usize,
        blue_automated: bool,
        red_automated: bool,
    ) -> Self {
        Self::with_selector(
            GameSettings::new(variant, board_size, blue_automated, red_automated),
            MoveSelector::from_entropy(),
        )
    }

    /// Creates a game with an explicit selector, e.g. a seeded one.
    #[instrument(skip(selector))]
    pub fn with_selector(settings: GameSettings, selector: MoveSelector) -> Self {
        let state = GameState::from_settings(&settings);
        info!(
            variant = %state.variant(),
            size = state.board_size(),
            blue_automated = settings.blue_automated(),
            red_automated = settings.red_automated(),
            "Creating new game"
        );
        Self {
            state,
            selector,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Registers a callback for every accepted placement, human or automated.
    pub fn subscribe(&mut self, listener: impl FnMut(&TurnOutcome) + 'static) {
        self.notifier.subscribe(listener);
        debug!(listeners = self.notifier.len(), "Subscriber added");
    }

    /// Drops all subscribers. Called when a game is replaced.
    pub fn dispose(&mut self) {
        self.notifier.clear();
    }

    /// Starts the game.
    ///
    /// If Blue is automated, its moves (and any that follow while automated
    /// seats hold the turn) are played before this returns.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.state.is_started() {
            warn!("Start requested on a running game");
            return Err(SessionError::AlreadyStarted);
        }
        self.state.mark_started();
        info!("Game started");
        self.run_automated_turns();
        Ok(())
    }

    /// Places a tile for the current seat. Returns false if rejected.
    pub fn place_tile(&mut self, row: usize, col: usize, symbol: Symbol) -> bool {
        self.try_place_tile(row, col, symbol).is_ok()
    }

    /// Places a tile for the current seat and then lets automated seats
    /// move until a human holds the turn or the game ends.
    ///
    /// Returns the outcome of this placement only; automated moves are
    /// reported to subscribers.
    #[instrument(skip(self), fields(seat = %self.state.current_turn()))]
    pub fn try_place_tile(
        &mut self,
        row: usize,
        col: usize,
        symbol: Symbol,
    ) -> Result<TurnOutcome, PlacementError> {
        let outcome = self.apply(Move::new(symbol, Position::new(row, col)))?;
        self.run_automated_turns();
        Ok(outcome)
    }

    fn apply(&mut self, mv: Move) -> Result<TurnOutcome, PlacementError> {
        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let outcome = self.state.place(mv).inspect_err(|err| {
            debug!(%mv, error = %err, "Placement rejected");
        })?;

        #[cfg(debug_assertions)]
        PlacementContract::post(&before, &self.state)?;

        info!(
            seat = %outcome.seat,
            %mv,
            completed = outcome.sequences.len(),
            blue = self.state.score(Seat::Blue),
            red = self.state.score(Seat::Red),
            "Tile placed"
        );
        self.notifier.notify(&outcome);

        if let Some(result) = self.state.outcome() {
            info!(%result, "Game over");
        }
        Ok(outcome)
    }

    fn run_automated_turns(&mut self) {
        while self.state.is_current_seat_automated() && !self.state.is_game_over() {
            let decision = self.selector.choose(&self.state);
            debug!(tier = %decision.tier, mv = %decision.mv, "Automated seat chose");
            if let Err(err) = self.apply(decision.mv) {
                panic!("automated move {} was rejected: {err}", decision.mv);
            }
        }
    }

    /// The rule state, for read-only inspection or cloning.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    /// Settings the game was created with.
    pub fn settings(&self) -> GameSettings {
        self.state.settings()
    }

    /// Returns true once started.
    pub fn is_started(&self) -> bool {
        self.state.is_started()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The variant's terminal predicate.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Winning seat; `None` on a draw or while running.
    pub fn winner(&self) -> Option<Seat> {
        self.state.winner()
    }

    /// Final outcome; `None` while running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Seat to move.
    pub fn current_turn(&self) -> Seat {
        self.state.current_turn()
    }

    /// Returns true if the seat to move is automated.
    pub fn is_current_seat_automated(&self) -> bool {
        self.state.is_current_seat_automated()
    }

    /// Score of `seat`.
    pub fn score(&self, seat: Seat) -> u32 {
        self.state.score(seat)
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.state.board_size()
    }

    /// Rule variant.
    pub fn variant(&self) -> Variant {
        self.state.variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_start_twice_fails() {
        let mut game = Game::create_new_game(Variant::Simple, 3, false, false);
        assert!(game.start().is_ok());
        assert_eq!(game.start(), Err(SessionError::AlreadyStarted));
    }

    #[test]
    fn test_place_before_start_rejected() {
        let mut game = Game::create_new_game(Variant::Simple, 3, false, false);
        assert!(!game.place_tile(0, 0, Symbol::S));
        assert_eq!(
            game.try_place_tile(0, 0, Symbol::S),
            Err(PlacementError::NotStarted)
        );
    }

    #[test]
    fn test_automated_blue_opens_on_start() {
        let selector = MoveSelector::seeded(11);
        let settings = GameSettings::new(Variant::General, 4, true, false);
        let mut game = Game::with_selector(settings, selector);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        game.subscribe(move |outcome| sink.borrow_mut().push(outcome.clone()));

        game.start().unwrap();

        assert_eq!(game.state().ledger().len(), 1);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].seat, Seat::Blue);
        assert_eq!(game.current_turn(), Seat::Red);
    }

    #[test]
    fn test_dispose_silences_subscribers() {
        let mut game = Game::create_new_game(Variant::General, 3, false, false);
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        game.subscribe(move |_| *sink.borrow_mut() += 1);
        game.start().unwrap();
        assert!(game.place_tile(0, 0, Symbol::S));
        game.dispose();
        assert!(game.place_tile(1, 1, Symbol::O));
        assert_eq!(*count.borrow(), 1);
    }
}
