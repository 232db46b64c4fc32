use crate::grid::FogGrid;
use crate::types::*;

/// Generate all legal destinations for a king on `grid`, returning a freshly
/// allocated vector. Order follows [`KING_OFFSETS`].
pub fn legal_moves(grid: &FogGrid, king: Coord) -> Vec<Coord> {
    let mut out = Vec::with_capacity(8);
    legal_moves_into(grid, king, &mut out);
    out
}

/// Generate all legal destinations into the provided buffer, reusing it across calls.
pub fn legal_moves_into(grid: &FogGrid, king: Coord, out: &mut Vec<Coord>) {
    out.clear();
    for (dr, dc) in KING_OFFSETS {
        let to = king.offset(dr, dc);
        if grid.in_bounds(to) && !grid.is_visited(to) {
            out.push(to);
        }
    }
}

/// Count legal destinations without allocating.
pub fn mobility(grid: &FogGrid, king: Coord) -> usize {
    KING_OFFSETS
        .iter()
        .map(|&(dr, dc)| king.offset(dr, dc))
        .filter(|&to| grid.in_bounds(to) && !grid.is_visited(to))
        .count()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
