//! Bitset of visited cells.
//!
//! Bit `row * cols + col` is set once a king has left that cell. The grid never
//! changes shape after construction, so do/undo only flips single bits.

use serde::{Deserialize, Serialize};

use crate::types::Coord;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FogGrid {
    rows: i32,
    cols: i32,
    words: Vec<u64>,
}

impl FogGrid {
    /// All cells fogged (unvisited).
    pub fn new(rows: i32, cols: i32) -> Self {
        let cells = (rows.max(0) as usize) * (cols.max(0) as usize);
        Self {
            rows,
            cols,
            words: vec![0; cells.div_ceil(64)],
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline(always)]
    pub fn in_bounds(&self, c: Coord) -> bool {
        (0..self.rows).contains(&c.row) && (0..self.cols).contains(&c.col)
    }

    #[inline(always)]
    fn bit(&self, c: Coord) -> (usize, u64) {
        let idx = c.row as usize * self.cols as usize + c.col as usize;
        (idx / 64, 1u64 << (idx % 64))
    }

    /// Caller guarantees `c` is in bounds.
    #[inline(always)]
    pub fn is_visited(&self, c: Coord) -> bool {
        let (w, mask) = self.bit(c);
        self.words[w] & mask != 0
    }

    #[inline(always)]
    pub fn visit(&mut self, c: Coord) {
        let (w, mask) = self.bit(c);
        self.words[w] |= mask;
    }

    #[inline(always)]
    pub fn unvisit(&mut self, c: Coord) {
        let (w, mask) = self.bit(c);
        self.words[w] &= !mask;
    }

    /// Number of visited cells.
    pub fn count_visited(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Iterate over visited cells in row-major order.
    pub fn visited(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| Coord::new(r, c)))
            .filter(move |&c| self.is_visited(c))
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod grid_tests;
