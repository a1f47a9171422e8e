//! Runtime invariants for SOS.
//!
//! Every invariant here is checked the same way: replay the turn ledger
//! onto an empty grid and compare what falls out with the live state.

use super::grid::Grid;
use super::ledger::LedgerEntry;
use super::rules::sequence::count_completed;

/// A property a game state must satisfy after every accepted placement.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Statement of the property that failed.
    pub description: String,
}

impl InvariantViolation {
    /// Builds a violation from an invariant's description.
    pub fn of<S, I: Invariant<S>>() -> Self {
        Self {
            description: I::description().to_string(),
        }
    }
}

/// Several invariants checked as one.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks every member, returning all failures rather than the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! tuple_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut failed = Vec::new();
                $(
                    if !$member::holds(state) {
                        failed.push(InvariantViolation::of::<S, $member>());
                    }
                )+
                if failed.is_empty() { Ok(()) } else { Err(failed) }
            }
        }
    };
}

tuple_invariant_set!(A, B);
tuple_invariant_set!(A, B, C);
tuple_invariant_set!(A, B, C, D);

/// Walks the ledger over a fresh grid, yielding each entry with the number
/// of sequences it completed at the time it was placed.
///
/// Returns `None` if an entry targets an occupied or off-board cell or
/// places an empty symbol.
pub(crate) fn replay_ledger(size: usize, entries: &[LedgerEntry]) -> Option<(Grid, Vec<(LedgerEntry, u32)>)> {
    let mut grid = Grid::new(size);
    let mut scored = Vec::with_capacity(entries.len());
    for entry in entries {
        if !grid.is_empty(entry.position) || entry.symbol.is_empty() {
            return None;
        }
        let points = count_completed(&grid, entry.position, entry.symbol) as u32;
        grid.set(entry.position.row, entry.position.col, entry.symbol);
        scored.push((*entry, points));
    }
    Some((grid, scored))
}

pub mod monotonic_grid;
pub mod score_consistent;
pub mod turn_order;

pub use monotonic_grid::MonotonicGridInvariant;
pub use score_consistent::ScoreConsistentInvariant;
pub use turn_order::TurnOrderInvariant;

/// All SOS invariants as a composable set.
pub type SosInvariants = (
    MonotonicGridInvariant,
    ScoreConsistentInvariant,
    TurnOrderInvariant,
);
