//! Alpha-Beta King Catch Engine
//!
//! Fixed-depth negamax with alpha-beta pruning over the mobility evaluation.
//! No iterative deepening, no time limit, no transposition table: a search
//! always runs to its configured depth or to a terminal position.

pub mod search;

use king_core::{Agent, GameState, KingResult, MoveChoice, SearchConfig};

pub use search::{pick_best_move, search, SearchOutcome, SearchResult};

/// Computer player backed by [`search::pick_best_move`].
///
/// This agent uses:
/// - Negamax search with alpha-beta pruning
/// - Mobility-difference evaluation with WIN/LOSS sentinels
/// - First-found tie-breaking, so identical states get identical moves
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaAgent {
    config: SearchConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    /// Agent with default sentinels searching `depth` plies.
    pub fn with_depth(depth: u8) -> KingResult<Self> {
        Ok(Self::new(SearchConfig::depth(depth)?))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search a scratch copy of `state` and report score and line.
    pub fn analyse(&mut self, state: &GameState) -> KingResult<SearchOutcome> {
        self.nodes = 0;
        let mut scratch = state.clone();
        pick_best_move(&mut scratch, &self.config, &mut self.nodes)
    }
}

impl Agent for AlphaBetaAgent {
    fn choose_move(&mut self, state: &GameState) -> KingResult<MoveChoice> {
        Ok(self.analyse(state)?.choice)
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
