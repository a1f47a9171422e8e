//! Tests for the automated move selector against full games.

use std::cell::RefCell;
use std::rc::Rc;
use strictly_sos::{
    Game, GameSettings, Move, MoveSelector, Position, Seat, Symbol, Tier, TurnOutcome, Variant,
};

/// 4x4 position where every empty cell hands the opponent a sequence.
///
/// ```text
///    0 1 2 3
/// 0  S S O O
/// 1  O . S O
/// 2  O O . S
/// 3  O O O S
/// ```
///
/// No sequence exists yet and Blue is to move.
fn no_safe_move() -> Game {
    let mut game = Game::with_selector(
        GameSettings::new(Variant::General, 4, false, false),
        MoveSelector::seeded(0),
    );
    game.start().unwrap();
    let moves = [
        (0, 2, Symbol::O), // Blue
        (3, 3, Symbol::S), // Red
        (0, 0, Symbol::S),
        (2, 1, Symbol::O),
        (3, 0, Symbol::O),
        (2, 0, Symbol::O),
        (0, 3, Symbol::O),
        (1, 0, Symbol::O),
        (1, 2, Symbol::S),
        (1, 3, Symbol::O),
        (3, 1, Symbol::O),
        (0, 1, Symbol::S),
        (3, 2, Symbol::O),
        (2, 3, Symbol::S),
    ];
    for (row, col, symbol) in moves {
        let outcome = game.try_place_tile(row, col, symbol).unwrap();
        assert!(!outcome.scored(), "setup move at ({row}, {col}) scored");
    }
    game
}

#[test]
fn test_fallback_when_no_defensive_move_exists() {
    let game = no_safe_move();
    assert_eq!(game.current_turn(), Seat::Blue);
    let empty = game.state().empty_positions();
    assert_eq!(empty, vec![Position::new(1, 1), Position::new(2, 2)]);

    for seed in 0..20 {
        let decision = MoveSelector::seeded(seed).choose(game.state());
        assert_eq!(decision.tier, Tier::Fallback);
        assert!(empty.contains(&decision.mv.position));
    }
}

#[test]
fn test_fallback_move_hands_opponent_the_game() {
    let mut game = no_safe_move();
    let decision = MoveSelector::seeded(4).choose(game.state());
    let Move { symbol, position } = decision.mv;
    assert!(game.place_tile(position.row, position.col, symbol));

    let reply = game.state().empty_positions()[0];
    let other = if symbol == Symbol::S { Symbol::O } else { Symbol::S };
    let outcome = game.try_place_tile(reply.row, reply.col, other).unwrap();

    assert_eq!(outcome.seat, Seat::Red);
    assert_eq!(outcome.points(), 1);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Seat::Red));
}

#[test]
fn test_automated_seat_never_misses_a_point() {
    let mut game = Game::with_selector(
        GameSettings::new(Variant::General, 4, false, true),
        MoveSelector::seeded(8),
    );
    let turns = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&turns);
    game.subscribe(move |outcome: &TurnOutcome| sink.borrow_mut().push(outcome.clone()));
    game.start().unwrap();

    while !game.is_game_over() {
        let cell = game.state().empty_positions()[0];
        let mut probe = game.state().clone();
        probe.place_at(cell.row, cell.col, Symbol::S).unwrap();
        let red_can_score = probe.current_turn() == Seat::Red
            && !probe.is_game_over()
            && probe.empty_positions().iter().any(|pos| {
                Symbol::PLACEABLE
                    .iter()
                    .any(|symbol| probe.would_complete(Move::new(*symbol, *pos)) > 0)
            });

        let reply_index = turns.borrow().len() + 1;
        assert!(game.place_tile(cell.row, cell.col, Symbol::S));

        if red_can_score {
            let reply = turns.borrow()[reply_index].clone();
            assert_eq!(reply.seat, Seat::Red);
            assert!(reply.scored(), "Red passed up a point with {}", reply.placed);
        }
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed| {
        let mut game = Game::with_selector(
            GameSettings::new(Variant::General, 6, true, true),
            MoveSelector::seeded(seed),
        );
        game.start().unwrap();
        game.state().clone()
    };
    assert_eq!(play(17), play(17));
}
