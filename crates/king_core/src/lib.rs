pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod grid;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use agent::{AgentStatus, BackgroundAgent};
pub use board::*;
pub use config::*;
pub use error::{KingError, KingResult};
pub use eval::{LOSS, WIN, evaluate};
pub use grid::FogGrid;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Agent trait: implemented by every kind of player (search, random, human)
// =============================================================================

/// Outcome of asking an agent for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    Play(Move),
    /// No move offered: the side to move is boxed in or gives up.
    NoMoveAvailable,
}

impl MoveChoice {
    pub fn into_move(self) -> Option<Move> {
        match self {
            MoveChoice::Play(mv) => Some(mv),
            MoveChoice::NoMoveAvailable => None,
        }
    }
}

/// Trait that all players must implement.
///
/// The turn loop only ever holds a `dyn Agent`, so it does not care whether
/// the move comes from a search, a coin flip or a person at a terminal.
pub trait Agent: Send {
    /// Pick a move for the side to move in `state`.
    ///
    /// Agents own no game state: `state` is the live position lent for the
    /// duration of the call.
    fn choose_move(&mut self, state: &GameState) -> KingResult<MoveChoice>;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
