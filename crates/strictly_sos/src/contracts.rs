//! Placement contracts.
//!
//! A placement is legal when every precondition check passes on the state
//! before it, and correct when the postcondition holds between the states
//! before and after it.

use super::action::{Move, PlacementError};
use super::invariants::{InvariantSet, SosInvariants};
use super::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract
// ─────────────────────────────────────────────────────────────

/// Pre- and postconditions around a transition of `S` driven by `A`.
pub trait Contract<S, A> {
    /// Must pass on the state the action is applied to.
    fn pre(state: &S, action: &A) -> Result<(), PlacementError>;

    /// Must pass on the states either side of the action.
    fn post(before: &S, after: &S) -> Result<(), PlacementError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game is running and has room for another tile.
pub struct AcceptsPlacements;

impl AcceptsPlacements {
    /// Rejects placements on finished, full, or unstarted games.
    pub fn check(game: &GameState) -> Result<(), PlacementError> {
        if game.is_game_over() {
            Err(PlacementError::GameOver)
        } else if game.is_board_full() {
            Err(PlacementError::BoardFull)
        } else if !game.is_started() {
            Err(PlacementError::NotStarted)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the position lies on the grid.
pub struct WithinBounds;

impl WithinBounds {
    /// Rejects positions past the last row or column.
    pub fn check(mv: &Move, game: &GameState) -> Result<(), PlacementError> {
        if game.grid().contains(mv.position.row, mv.position.col) {
            Ok(())
        } else {
            Err(PlacementError::OutOfBounds(mv.position))
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    pub fn check(mv: &Move, game: &GameState) -> Result<(), PlacementError> {
        if game.grid().is_empty(mv.position) {
            Ok(())
        } else {
            Err(PlacementError::Occupied(mv.position))
        }
    }
}

/// Precondition: only `S` or `O` may be placed.
pub struct SymbolIsPlaceable;

impl SymbolIsPlaceable {
    /// Rejects [`Symbol::Empty`](super::types::Symbol::Empty).
    pub fn check(mv: &Move) -> Result<(), PlacementError> {
        if mv.symbol.is_empty() {
            Err(PlacementError::EmptySymbol)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, evaluated in rule order; the first failure wins.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    pub fn check(mv: &Move, game: &GameState) -> Result<(), PlacementError> {
        AcceptsPlacements::check(game)?;
        WithinBounds::check(mv, game)?;
        CellIsEmpty::check(mv, game)?;
        SymbolIsPlaceable::check(mv)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Preconditions:
/// - Game started, not over, board not full
/// - Position on the grid and empty
/// - Symbol is `S` or `O`
///
/// Postconditions:
/// - Exactly one ledger entry was appended
/// - Grid is monotonic and matches the ledger
/// - Scores and turn order match a replay of the ledger
pub struct PlacementContract;

impl Contract<GameState, Move> for PlacementContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), PlacementError> {
        LegalPlacement::check(action, game)
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), PlacementError> {
        if after.ledger().len() != before.ledger().len() + 1 {
            warn!(
                before = before.ledger().len(),
                after = after.ledger().len(),
                "Ledger did not grow by one"
            );
            return Err(PlacementError::InvariantViolation(
                "Postcondition failed: ledger must grow by exactly one entry".to_string(),
            ));
        }

        SosInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after placement");
            PlacementError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
