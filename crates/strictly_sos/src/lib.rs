//! Strictly SOS - type-safe SOS game logic
//!
//! Two seats, Blue and Red, take turns placing `S` or `O` on a square grid.
//! Completing an S-O-S run in any of the eight directions scores a point
//! and earns another turn.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] is the clonable rule core (grid, ledger, scores)
//! - **Rules**: sequence detection and the [`Variant`] end conditions
//! - **Contracts**: placement preconditions and invariant postconditions
//! - **Selector**: [`MoveSelector`] picks moves for automated seats
//! - **Session**: [`Game`] adds subscribers and drives automated seats
//! - **Record**: [`GameRecord`] captures and replays finished games
//!
//! # Example
//!
//! ```
//! use strictly_sos::{Game, Seat, Symbol, Variant};
//!
//! let mut game = Game::create_new_game(Variant::Simple, 3, false, false);
//! game.start().unwrap();
//! assert!(game.place_tile(0, 0, Symbol::S));
//! assert!(game.place_tile(2, 2, Symbol::S));
//! assert!(game.place_tile(0, 1, Symbol::O));
//! assert!(game.place_tile(1, 1, Symbol::S));
//! assert!(game.place_tile(0, 2, Symbol::S));
//! assert_eq!(game.winner(), Some(Seat::Blue));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
mod grid;
pub mod invariants;
mod ledger;
mod notify;
mod phases;
mod player;
mod record;
pub mod rules;
mod selector;
mod state;
mod types;

// Crate-level exports - Core types
pub use types::{AXES, Direction, Position, Seat, Symbol};

// Crate-level exports - Grid
pub use grid::{DEFAULT_BOARD_SIZE, Grid, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

// Crate-level exports - Actions and errors
pub use action::{Move, PlacementError, Sequence, SessionError, TurnOutcome};

// Crate-level exports - Rules
pub use rules::{Variant, completed_sequences};

// Crate-level exports - State
pub use ledger::{LedgerEntry, TurnLedger};
pub use phases::{Outcome, Phase};
pub use player::Player;
pub use state::{GameSettings, GameState};

// Crate-level exports - Session
pub use game::Game;
pub use notify::{ChangeNotifier, OutcomeListener};
pub use selector::{Decision, MoveSelector, Tier};

// Crate-level exports - Records
pub use record::{GameRecord, Recorder, ReplayError};
