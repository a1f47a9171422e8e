//! Turn order invariant: scoring keeps the turn, anything else passes it.

use super::super::{GameState, Seat};
use super::{Invariant, replay_ledger};

/// Invariant: every placement was made by the seat whose turn it was.
///
/// Blue opens. After a placement that completed nothing the other seat
/// moves; after a scoring placement the same seat moves again. The current
/// turn must be where that walk ends.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(game: &GameState) -> bool {
        let Some((_, scored)) = replay_ledger(game.board_size(), game.ledger().entries()) else {
            return false;
        };

        let mut expected = Seat::Blue;
        for (entry, points) in scored {
            if entry.seat != expected {
                return false;
            }
            if points == 0 {
                expected = expected.opponent();
            }
        }

        game.current_turn() == expected
    }

    fn description() -> &'static str {
        "Seats alternate except after a scoring placement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Symbol, Variant};

    #[test]
    fn test_alternation_and_bonus_turn_hold() {
        let mut game = GameState::new(Variant::General, 4, false, false);
        game.mark_started();
        assert!(TurnOrderInvariant::holds(&game));

        game.place_at(0, 0, Symbol::S).unwrap(); // Blue
        game.place_at(0, 1, Symbol::O).unwrap(); // Red
        assert_eq!(game.current_turn(), Seat::Blue);
        game.place_at(0, 2, Symbol::S).unwrap(); // Blue scores, moves again
        assert_eq!(game.current_turn(), Seat::Blue);
        game.place_at(3, 3, Symbol::O).unwrap(); // Blue
        assert_eq!(game.current_turn(), Seat::Red);
        assert!(TurnOrderInvariant::holds(&game));
    }
}
