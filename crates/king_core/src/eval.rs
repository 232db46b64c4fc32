use crate::board::GameState;
use crate::movegen::mobility;

/// Score of a forced win. Exceeds any mobility differential by a wide margin.
pub const WIN: i32 = 1_000_000;
/// Score of a forced loss; always exactly `-WIN`.
pub const LOSS: i32 = -WIN;

/// Mobility evaluation from the side-to-move's perspective.
///
/// `win` is the sentinel magnitude (see [`crate::SearchConfig`]); a caught or
/// boxed-in side to move scores `-win`, a boxed-in opponent `win`, anything
/// else the difference in legal move counts.
pub fn evaluate(state: &GameState, win: i32) -> i32 {
    if state.is_capture() {
        return -win;
    }
    let moves_us = mobility(&state.grid, state.us()) as i32;
    if moves_us == 0 {
        return -win;
    }
    let moves_them = mobility(&state.grid, state.them()) as i32;
    if moves_them == 0 {
        return win;
    }
    moves_us - moves_them
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
