//! Match runner for playing games between agents

use king_core::{
    mobility, Agent, Coord, GameConfig, GameState, KingResult, Move, MoveChoice, PlayOutcome,
    Side,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Board and search settings
    pub game: GameConfig,
    /// Maximum moves per game before it is abandoned
    pub max_moves: u32,
    /// Whether to alternate sides each game
    pub alternate_sides: bool,
    /// Seed for start positions (None = fresh entropy)
    pub seed: Option<u64>,
    /// Log every finished game
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            game: GameConfig::default(),
            max_moves: 200,
            alternate_sides: true,
            seed: None,
            verbose: true,
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// Winner moved onto the loser's king
    Capture,
    /// Loser had no unvisited neighbour on its turn
    Boxed,
    /// Loser's agent gave up while it still had moves
    Forfeit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won { winner: Side, reason: WinReason },
    /// Move cap reached
    Unfinished,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::Won { winner, .. } => Some(*winner),
            GameOutcome::Unfinished => None,
        }
    }
}

/// Everything needed to replay a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub rows: i32,
    pub cols: i32,
    pub red_start: Coord,
    pub black_start: Coord,
    /// Name of the agent playing each side, indexed by `Side::idx()`
    pub players: [String; 2],
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Rebuild the final position by replaying the recorded moves.
    pub fn replay(&self) -> KingResult<GameState> {
        let mut state =
            GameState::new(self.rows, self.cols, self.red_start, self.black_start, Side::Red)?;
        for &mv in &self.moves {
            state.play(mv)?;
        }
        Ok(state)
    }
}

/// Result of a match, from the first agent's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub unfinished: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.unfinished
    }

    /// Score from the first agent's perspective (1 for a win, 0.5 for an unfinished game)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.unfinished as f64) / total
    }
}

/// Two distinct, uniformly random cells for the kings.
pub fn random_kings<R: Rng + ?Sized>(rows: i32, cols: i32, rng: &mut R) -> (Coord, Coord) {
    loop {
        let red = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let black = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        if red != black {
            return (red, black);
        }
    }
}

/// Runs matches between two agents
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> KingResult<Self> {
        config.game.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two agents
    ///
    /// Returns the result from agent `a`'s perspective
    pub fn run_match(&self, a: &mut dyn Agent, b: &mut dyn Agent) -> KingResult<MatchResult> {
        let mut result = MatchResult::default();
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (rows, cols) = (self.config.game.rows, self.config.game.cols);

        for game_num in 0..self.config.num_games {
            // Alternate sides if configured
            let a_is_red = !self.config.alternate_sides || game_num % 2 == 0;
            let (red, black) = random_kings(rows, cols, &mut rng);
            let start = GameState::new(rows, cols, red, black, Side::Red)?;

            let record = if a_is_red {
                self.play_game(start, a, b)?
            } else {
                self.play_game(start, b, a)?
            };

            let a_side = if a_is_red { Side::Red } else { Side::Black };
            match record.outcome.winner() {
                Some(side) if side == a_side => result.wins += 1,
                Some(_) => result.losses += 1,
                None => result.unfinished += 1,
            }

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    a_side = %a_side,
                    outcome = ?record.outcome,
                    moves = record.moves.len(),
                    score = %format!("{}-{}-{}", result.wins, result.losses, result.unfinished),
                    "game finished"
                );
            }
            result.games.push(record);
        }

        Ok(result)
    }

    /// Play a single game from `start`. Red moves first.
    pub fn play_game(
        &self,
        start: GameState,
        red: &mut dyn Agent,
        black: &mut dyn Agent,
    ) -> KingResult<GameRecord> {
        red.new_game();
        black.new_game();

        let mut state = start;
        let mut record = GameRecord {
            rows: state.rows(),
            cols: state.cols(),
            red_start: state.king(Side::Red),
            black_start: state.king(Side::Black),
            players: [red.name().to_string(), black.name().to_string()],
            moves: Vec::new(),
            outcome: GameOutcome::Unfinished,
        };

        for _ in 0..self.config.max_moves {
            let mover = state.side_to_move;

            if mobility(&state.grid, state.us()) == 0 {
                record.outcome = GameOutcome::Won {
                    winner: mover.other(),
                    reason: WinReason::Boxed,
                };
                return Ok(record);
            }

            let choice = match mover {
                Side::Red => red.choose_move(&state)?,
                Side::Black => black.choose_move(&state)?,
            };

            let mv = match choice {
                MoveChoice::Play(mv) => mv,
                MoveChoice::NoMoveAvailable => {
                    record.outcome = GameOutcome::Won {
                        winner: mover.other(),
                        reason: WinReason::Forfeit,
                    };
                    return Ok(record);
                }
            };

            let outcome = state.play(mv)?;
            record.moves.push(mv);
            match outcome {
                PlayOutcome::Continue => {}
                PlayOutcome::Capture => {
                    record.outcome = GameOutcome::Won {
                        winner: mover,
                        reason: WinReason::Capture,
                    };
                    return Ok(record);
                }
                PlayOutcome::Boxed => {
                    record.outcome = GameOutcome::Won {
                        winner: mover,
                        reason: WinReason::Boxed,
                    };
                    return Ok(record);
                }
            }
        }

        // Max moves reached
        Ok(record)
    }
}

/// Quick match between two agents on the default board
pub fn quick_match(
    a: &mut dyn Agent,
    b: &mut dyn Agent,
    num_games: u32,
    seed: Option<u64>,
) -> KingResult<MatchResult> {
    let config = MatchConfig {
        num_games,
        seed,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config)?.run_match(a, b)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
