//! Random Move King Catch Agent
//!
//! A simple agent that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Exercising the match runner without paying for a search
//! - Baseline comparisons (any real search should easily beat this)
//! - Stress testing move generation

use king_core::{legal_moves, Agent, GameState, KingResult, Move, MoveChoice};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An agent that plays random legal moves.
///
/// It provides no evaluation and no look-ahead; it will happily walk into a
/// capture. Seed it for reproducible games.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, state: &GameState) -> KingResult<MoveChoice> {
        state.validate()?;
        let moves = legal_moves(&state.grid, state.us());

        Ok(match moves.choose(&mut self.rng) {
            Some(&to) => MoveChoice::Play(Move::new(state.side_to_move, to)),
            None => MoveChoice::NoMoveAvailable,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
