use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}
impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Black];

    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => f.write_str("red"),
            Side::Black => f.write_str("black"),
        }
    }
}

/// A grid cell, 0-indexed. Signed so that stepping off the edge is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, dr: i32, dc: i32) -> Coord {
        Coord::new(self.row + dr, self.col + dc)
    }

    /// True when `other` is one king step away (never the same cell).
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a cell looks like to a viewer of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    OccupiedByRed,
    OccupiedByBlack,
    Unvisited,
    Visited,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub side: Side,
    pub to: Coord,
}

impl Move {
    pub fn new(side: Side, to: Coord) -> Self {
        Self { side, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.side, self.to)
    }
}

/// King step offsets in row-major order. The order decides search tie-breaks.
pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Upper bound on the mobility of a single king.
pub const MAX_MOBILITY: i32 = 8;

/// Board dimensions accepted by [`crate::GameState::new`] and [`crate::GameConfig`].
pub const MIN_BOARD_SIDE: i32 = 2;
pub const MAX_BOARD_SIDE: i32 = 1024;
