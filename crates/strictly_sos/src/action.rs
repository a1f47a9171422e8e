//! First-class action and outcome types for SOS.
//!
//! Moves are domain events, not side effects. A [`TurnOutcome`] is the
//! atomic unit broadcast to subscribers and stored in replay records.

use super::types::{Position, Seat, Symbol};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A proposed or executed placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The symbol being placed.
    pub symbol: Symbol,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Returns the symbol of this move.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.symbol, self.position)
    }
}

/// One completed S-O-S run: two `S` endpoints around an `O` center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Sequence {
    /// Endpoint nearest the placement that completed it (or the lower-indexed
    /// end when the completing tile was the center).
    pub first_end: Position,
    /// The `O` cell.
    pub center: Position,
    /// The opposite endpoint.
    pub second_end: Position,
}

impl Sequence {
    /// The three cells in order.
    pub fn cells(&self) -> [Position; 3] {
        [self.first_end, self.center, self.second_end]
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.first_end, self.center, self.second_end)
    }
}

/// Result of one accepted placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct TurnOutcome {
    /// The placement that was made.
    pub placed: Move,
    /// Sequences completed by that placement.
    pub sequences: Vec<Sequence>,
    /// The seat that made it.
    pub seat: Seat,
}

impl TurnOutcome {
    /// Number of points the placement earned.
    pub fn points(&self) -> u32 {
        self.sequences.len() as u32
    }

    /// Returns true if the placement completed at least one sequence.
    pub fn scored(&self) -> bool {
        !self.sequences.is_empty()
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} placed {}", self.seat, self.placed)?;
        if self.scored() {
            write!(f, " and completed {} SOS", self.sequences.len())?;
        }
        Ok(())
    }
}

/// Reason a placement was rejected.
///
/// Rejections are expected during play and never change game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlacementError {
    /// The game has not been started.
    #[display("Game has not been started")]
    NotStarted,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Every cell is filled.
    #[display("Board is full")]
    BoardFull,

    /// The position lies outside the grid.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(Position),

    /// The cell already holds a symbol.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),

    /// Only `S` and `O` may be placed.
    #[display("Cannot place an empty symbol")]
    EmptySymbol,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for PlacementError {}

/// Misuse of the session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// `start` was called on a game that is already running.
    #[display("Game already started")]
    AlreadyStarted,
}
