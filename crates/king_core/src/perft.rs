use crate::board::GameState;
use crate::movegen::legal_moves_into;
use crate::types::Coord;

/// Pure perft leaf count.
/// Counts move sequences from the current state down to `depth`; captures and
/// boxed-in kings end a line early and count as one leaf.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    fn inner(state: &mut GameState, depth: u8, layers: &mut [Vec<Coord>]) -> u64 {
        if depth == 0 || state.is_capture() {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(&state.grid, state.us(), buf);
        if buf.is_empty() {
            return 1;
        }

        let mut nodes = 0u64;
        for to in buf.iter().copied() {
            let mut child = state.scoped_move(to);
            nodes += inner(&mut child, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(8); depth as usize];
    inner(state, depth, &mut layers[..])
}

#[cfg(test)]
#[path = "perft_tests.rs"]
mod perft_tests;
