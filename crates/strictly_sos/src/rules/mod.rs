//! Game rules for SOS.
//!
//! This module contains pure functions for evaluating board state
//! according to SOS rules. Rules are separated from board storage so the
//! same checks serve real placements, lookahead probes, and invariants.

pub mod sequence;
pub mod variant;

pub use sequence::completed_sequences;
pub use variant::Variant;
