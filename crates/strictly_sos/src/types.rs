//! Core domain types for SOS.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Seat in the game, identified by colour.
///
/// There is no "none" seat: the absence of a winner is `Option<Seat>::None`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Seat {
    /// Blue seat (moves first).
    Blue,
    /// Red seat.
    Red,
}

impl Seat {
    /// Returns the opposing seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::Blue => Seat::Red,
            Seat::Red => Seat::Blue,
        }
    }
}

/// Content of a grid cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Empty cell. Never a legal placement value.
    #[default]
    #[strum(serialize = ".")]
    Empty,
    /// The letter S (always a sequence endpoint).
    S,
    /// The letter O (always a sequence center).
    O,
}

impl Symbol {
    /// The two symbols a seat may place.
    pub const PLACEABLE: [Symbol; 2] = [Symbol::S, Symbol::O];

    /// Returns true for the empty cell marker.
    pub fn is_empty(self) -> bool {
        self == Symbol::Empty
    }
}

/// A cell coordinate, zero-based, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Moves `distance` cells in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// The upper bound is the grid's concern.
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr * distance as isize)?;
        let col = self.col.checked_add_signed(dc * distance as isize)?;
        Some(Self { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    /// Towards column 0.
    West,
    /// Towards the last column.
    East,
    /// Towards row 0.
    North,
    /// Towards the last row.
    South,
    /// Up and left.
    NorthWest,
    /// Down and right.
    SouthEast,
    /// Down and left.
    SouthWest,
    /// Up and right.
    NorthEast,
}

impl Direction {
    /// Row and column delta of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
        }
    }

    /// The direction pointing the other way.
    pub fn reverse(self) -> Self {
        match self {
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthEast => Direction::SouthWest,
        }
    }
}

/// The four lines through a cell, each named by one of its two directions.
pub const AXES: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::NorthWest,
    Direction::NorthEast,
];
