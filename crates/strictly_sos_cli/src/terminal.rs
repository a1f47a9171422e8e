//! Line-oriented terminal front end.
//!
//! The session renders the board, reads `ROW COL S|O` for the human seat
//! on move, and prints every placement it hears about from the game,
//! automated ones included.

use derive_more::Display;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use strictly_sos::{Game, Outcome, Seat, Symbol, TurnOutcome};
use tracing::{debug, info, instrument};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place `symbol` at (`row`, `col`).
    Place {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
        /// `S` or `O`.
        symbol: Symbol,
    },
    /// Leave the game.
    Quit,
}

/// Why a line could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was entered.
    #[display("Enter a move as ROW COL S|O, or q to quit")]
    Empty,
    /// Wrong number of words.
    #[display("Expected ROW COL S|O, got '{}'", _0)]
    Malformed(String),
    /// Row or column is not a number.
    #[display("'{}' is not a row or column number", _0)]
    BadNumber(String),
    /// Symbol is not S or O.
    #[display("'{}' is not S or O", _0)]
    BadSymbol(String),
}

impl std::error::Error for InputError {}

/// Parses `ROW COL S|O` or `q`.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Err(InputError::Empty),
        [quit] if quit.eq_ignore_ascii_case("q") || quit.eq_ignore_ascii_case("quit") => {
            Ok(Input::Quit)
        }
        [row, col, symbol] => {
            let row = row
                .parse()
                .map_err(|_| InputError::BadNumber(row.to_string()))?;
            let col = col
                .parse()
                .map_err(|_| InputError::BadNumber(col.to_string()))?;
            let symbol = match symbol.to_ascii_uppercase().as_str() {
                "S" => Symbol::S,
                "O" => Symbol::O,
                _ => return Err(InputError::BadSymbol(symbol.to_string())),
            };
            Ok(Input::Place { row, col, symbol })
        }
        _ => Err(InputError::Malformed(line.trim().to_string())),
    }
}

/// Board, scores, and whose turn it is.
pub fn render(game: &Game) -> String {
    let mut text = game.grid().display();
    text.push_str(&format!(
        "\n{} variant | Blue {} - Red {}",
        game.variant(),
        game.score(Seat::Blue),
        game.score(Seat::Red)
    ));
    if !game.is_game_over() {
        text.push_str(&format!(" | {} to move", game.current_turn()));
    }
    text
}

/// One line describing a placement.
pub fn describe(outcome: &TurnOutcome) -> String {
    let mut line = outcome.to_string();
    for sequence in &outcome.sequences {
        line.push_str(&format!("\n  SOS {}", sequence));
    }
    line
}

/// Final result line.
pub fn announce(outcome: Outcome, game: &Game) -> String {
    let (blue, red) = (game.score(Seat::Blue), game.score(Seat::Red));
    match outcome {
        Outcome::Winner(seat) => format!("{} wins, {} to {}", seat, blue.max(red), blue.min(red)),
        Outcome::Draw => format!("Draw, {} all", blue),
    }
}

/// How a terminal session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached its end condition.
    Finished(Outcome),
    /// The player quit, or input ran out.
    Quit,
}

/// A game attached to a terminal.
#[derive(Debug)]
pub struct TerminalSession {
    game: Game,
    feed: Rc<RefCell<Vec<TurnOutcome>>>,
}

impl TerminalSession {
    /// Subscribes to `game`. Start the game through [`TerminalSession::run`]
    /// so automated opening moves are shown.
    pub fn new(mut game: Game) -> Self {
        let feed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&feed);
        game.subscribe(move |outcome| sink.borrow_mut().push(outcome.clone()));
        Self { game, feed }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gives the game back.
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Plays until the game ends or the player quits.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<SessionEnd> {
        if !self.game.is_started() {
            self.game.start()?;
        }
        let mut lines = input.lines();

        loop {
            self.flush_feed(out)?;
            writeln!(out, "{}", render(&self.game))?;

            if let Some(outcome) = self.game.outcome() {
                writeln!(out, "{}", announce(outcome, &self.game))?;
                info!(%outcome, "Session finished");
                return Ok(SessionEnd::Finished(outcome));
            }

            write!(out, "{} (ROW COL S|O, q to quit): ", self.game.current_turn())?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                debug!("Input closed");
                return Ok(SessionEnd::Quit);
            };

            match parse_input(&line?) {
                Ok(Input::Quit) => {
                    info!("Player quit");
                    return Ok(SessionEnd::Quit);
                }
                Ok(Input::Place { row, col, symbol }) => {
                    if let Err(err) = self.game.try_place_tile(row, col, symbol) {
                        writeln!(out, "Rejected: {}", err)?;
                    }
                }
                Err(err) => writeln!(out, "{}", err)?,
            }
        }
    }

    fn flush_feed<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for outcome in self.feed.borrow_mut().drain(..) {
            writeln!(out, "{}", describe(&outcome))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_sos::{GameSettings, MoveSelector, Variant};

    #[test]
    fn test_parse_move() {
        assert_eq!(
            parse_input(" 2 1 o "),
            Ok(Input::Place {
                row: 2,
                col: 1,
                symbol: Symbol::O
            })
        );
        assert_eq!(parse_input("Q"), Ok(Input::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_input("   "), Err(InputError::Empty));
        assert_eq!(parse_input("1 2"), Err(InputError::Malformed("1 2".into())));
        assert_eq!(parse_input("a 2 S"), Err(InputError::BadNumber("a".into())));
        assert_eq!(parse_input("-1 2 S"), Err(InputError::BadNumber("-1".into())));
        assert_eq!(parse_input("1 2 X"), Err(InputError::BadSymbol("X".into())));
    }

    #[test]
    fn test_session_plays_simple_game() {
        let game = Game::with_selector(
            GameSettings::new(Variant::Simple, 3, false, false),
            MoveSelector::seeded(0),
        );
        let mut session = TerminalSession::new(game);
        let input = "0 0 S\n0 0 O\nnonsense\n0 1 O\n0 2 S\n";
        let mut out = Vec::new();

        let end = session.run(input.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(end, SessionEnd::Finished(Outcome::Winner(Seat::Blue)));
        assert!(text.contains("Rejected: Cell (0, 0) is already occupied"));
        assert!(text.contains("Expected ROW COL S|O"));
        assert!(text.contains("SOS (0, 2)-(0, 1)-(0, 0)"));
        assert!(text.contains("Blue wins, 1 to 0"));
    }

    #[test]
    fn test_session_quits_on_eof() {
        let game = Game::with_selector(
            GameSettings::new(Variant::General, 4, false, false),
            MoveSelector::seeded(0),
        );
        let mut session = TerminalSession::new(game);
        let mut out = Vec::new();
        let end = session.run("1 1 S\n".as_bytes(), &mut out).unwrap();
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(session.game().state().ledger().len(), 1);
    }

    #[test]
    fn test_automated_moves_are_printed() {
        let game = Game::with_selector(
            GameSettings::new(Variant::General, 3, true, true),
            MoveSelector::seeded(2),
        );
        let mut session = TerminalSession::new(game);
        let mut out = Vec::new();
        let end = session.run(std::io::empty(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(matches!(end, SessionEnd::Finished(_)));
        assert_eq!(text.matches(" placed ").count(), 9);
    }
}
