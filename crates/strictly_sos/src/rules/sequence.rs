//! Sequence detection.
//!
//! An `O` is always the center of a sequence and an `S` is always an
//! endpoint, so the two letters probe differently: an `O` checks both
//! neighbours on each of the four axes, an `S` looks two cells outward in
//! each of the eight directions.

use super::super::action::Sequence;
use super::super::grid::Grid;
use super::super::types::{AXES, Direction, Position, Symbol};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Sequences that `symbol` at `pos` completes.
///
/// Only the neighbours of `pos` are read, never `pos` itself, so this
/// answers both "what did the tile just written complete" and "what would
/// this tile complete" without touching the grid.
#[instrument(level = "trace", skip(grid))]
pub fn completed_sequences(grid: &Grid, pos: Position, symbol: Symbol) -> Vec<Sequence> {
    match symbol {
        Symbol::Empty => Vec::new(),
        Symbol::S => endpoint_sequences(grid, pos),
        Symbol::O => center_sequences(grid, pos),
    }
}

/// Number of sequences `symbol` at `pos` would complete.
pub fn count_completed(grid: &Grid, pos: Position, symbol: Symbol) -> usize {
    match symbol {
        Symbol::Empty => 0,
        Symbol::S => Direction::iter()
            .filter(|dir| endpoint_run(grid, pos, *dir).is_some())
            .count(),
        Symbol::O => AXES
            .iter()
            .filter(|axis| center_run(grid, pos, **axis).is_some())
            .count(),
    }
}

fn neighbour(grid: &Grid, pos: Position, dir: Direction, distance: usize) -> Option<(Position, Symbol)> {
    let cell = pos.step(dir, distance)?;
    Some((cell, grid.at(cell)))
}

/// `S` at `pos`, then `O`, then `S` walking along `dir`.
fn endpoint_run(grid: &Grid, pos: Position, dir: Direction) -> Option<Sequence> {
    let (center, middle) = neighbour(grid, pos, dir, 1)?;
    let (far, end) = neighbour(grid, pos, dir, 2)?;
    (middle == Symbol::O && end == Symbol::S).then(|| Sequence::new(pos, center, far))
}

/// `S` on both sides of `pos` along `axis`.
fn center_run(grid: &Grid, pos: Position, axis: Direction) -> Option<Sequence> {
    let (first, a) = neighbour(grid, pos, axis, 1)?;
    let (second, b) = neighbour(grid, pos, axis.reverse(), 1)?;
    (a == Symbol::S && b == Symbol::S).then(|| Sequence::new(first, pos, second))
}

fn endpoint_sequences(grid: &Grid, pos: Position) -> Vec<Sequence> {
    Direction::iter()
        .filter_map(|dir| endpoint_run(grid, pos, dir))
        .collect()
}

fn center_sequences(grid: &Grid, pos: Position) -> Vec<Sequence> {
    AXES.iter()
        .filter_map(|axis| center_run(grid, pos, *axis))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let symbol = match ch {
                    'S' => Symbol::S,
                    'O' => Symbol::O,
                    _ => Symbol::Empty,
                };
                grid.set(r, c, symbol);
            }
        }
        grid
    }

    #[test]
    fn test_empty_symbol_completes_nothing() {
        let grid = grid_from(&["S.S", "...", "..."]);
        assert!(completed_sequences(&grid, Position::new(0, 1), Symbol::Empty).is_empty());
    }

    #[test]
    fn test_o_between_two_s_in_row() {
        let grid = grid_from(&["S.S", "...", "..."]);
        let found = completed_sequences(&grid, Position::new(0, 1), Symbol::O);
        assert_eq!(
            found,
            vec![Sequence::new(Position::new(0, 0), Position::new(0, 1), Position::new(0, 2))]
        );
    }

    #[test]
    fn test_o_center_checks_all_axes() {
        let grid = grid_from(&["SSS", "S.S", "SSS"]);
        let found = completed_sequences(&grid, Position::new(1, 1), Symbol::O);
        assert_eq!(found.len(), 4);
        assert!(found.iter().all(|seq| seq.center == Position::new(1, 1)));
        assert_eq!(count_completed(&grid, Position::new(1, 1), Symbol::O), 4);
    }

    #[test]
    fn test_s_endpoint_reports_placed_cell_first() {
        let grid = grid_from(&["SO.", "...", "..."]);
        let found = completed_sequences(&grid, Position::new(0, 2), Symbol::S);
        assert_eq!(
            found,
            vec![Sequence::new(Position::new(0, 2), Position::new(0, 1), Position::new(0, 0))]
        );
    }

    #[test]
    fn test_s_checks_diagonals() {
        let grid = grid_from(&["S..", ".O.", "..."]);
        let found = completed_sequences(&grid, Position::new(2, 2), Symbol::S);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].second_end, Position::new(0, 0));
    }

    #[test]
    fn test_s_can_close_several_runs() {
        let grid = grid_from(&["S.S.S", ".OOO.", "SO.OS", ".OOO.", "S.S.S"]);
        let found = completed_sequences(&grid, Position::new(2, 2), Symbol::S);
        assert_eq!(found.len(), 8);
        assert_eq!(count_completed(&grid, Position::new(2, 2), Symbol::S), 8);
    }

    #[test]
    fn test_roles_are_not_swapped() {
        // O-S-O is not a sequence.
        let grid = grid_from(&["O.O", "...", "..."]);
        assert!(completed_sequences(&grid, Position::new(0, 1), Symbol::S).is_empty());
        let grid = grid_from(&["OS.", "...", "..."]);
        assert!(completed_sequences(&grid, Position::new(0, 2), Symbol::O).is_empty());
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // In row-major storage (1,-1) would alias (0,2).
        let grid = grid_from(&["..S", "O..", "..."]);
        assert!(completed_sequences(&grid, Position::new(1, 1), Symbol::S).is_empty());
    }
}
