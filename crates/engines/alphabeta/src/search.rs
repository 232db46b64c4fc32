//! Negamax search with alpha-beta pruning
//!
//! Every node scores the position for its own side to move; a parent negates
//! its child's score. The state is walked in place: each edge is a
//! [`GameState::scoped_move`], so the move is taken back on every exit path,
//! cutoffs included.

use king_core::{
    evaluate, legal_moves, legal_moves_into, GameState, KingError, KingResult, Move, MoveChoice,
    SearchConfig, MAX_MOBILITY,
};
use tracing::{debug, info};

/// How many moves of a forced line are written to the log.
const PV_TRACE_LEN: usize = 8;

/// Score and principal variation, root move first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from the side-to-move's perspective
    pub score: i32,
    /// Best line found, root move first
    pub pv: Vec<Move>,
}

/// Result from pick_best_move: the move to play plus the search behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub choice: MoveChoice,
    pub score: i32,
    pub pv: Vec<Move>,
}

/// Searches the state to the configured depth and returns the move to play.
///
/// # Arguments
/// * `state` - The position to search; restored before returning
/// * `config` - Depth and sentinel magnitude
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// `SearchOutcome` with `MoveChoice::NoMoveAvailable` when the side to move is boxed in
pub fn pick_best_move(
    state: &mut GameState,
    config: &SearchConfig,
    nodes: &mut u64,
) -> KingResult<SearchOutcome> {
    config.validate()?;
    let side = state.side_to_move;
    let start_nodes = *nodes;

    let result = search(state, config.depth, config.win_score, nodes)?;

    let choice = match result.pv.first() {
        Some(&mv) => MoveChoice::Play(mv),
        // Only a terminal root leaves the line empty
        None => match legal_moves(&state.grid, state.us()).first() {
            Some(&to) => MoveChoice::Play(Move::new(side, to)),
            None => MoveChoice::NoMoveAvailable,
        },
    };

    if result.score.abs() == config.win_score {
        let shown = &result.pv[..result.pv.len().min(PV_TRACE_LEN)];
        let line: Vec<String> = shown.iter().map(|mv| mv.to_string()).collect();
        let outcome = if result.score > 0 { "win" } else { "loss" };
        info!(
            %side,
            outcome,
            line = %line.join(" "),
            "forced result within search horizon"
        );
    }
    debug!(
        %side,
        score = result.score,
        depth = config.depth,
        nodes = *nodes - start_nodes,
        "search finished"
    );

    Ok(SearchOutcome {
        choice,
        score: result.score,
        pv: result.pv,
    })
}

/// Full-window search of `state` to `depth` plies.
///
/// `depth == 0` just evaluates. Fails when `win` does not dominate every
/// mobility score or a king is off the board.
pub fn search(
    state: &mut GameState,
    depth: u8,
    win: i32,
    nodes: &mut u64,
) -> KingResult<SearchResult> {
    if win <= MAX_MOBILITY {
        return Err(KingError::SentinelTooSmall(win));
    }
    state.validate()?;
    let mut result = negamax(state, depth, -win, win, win, nodes);
    // Moves were appended while unwinding
    result.pv.reverse();
    Ok(result)
}

/// Recursive fail-soft negamax over the window `(lo, hi)`.
///
/// The returned line is leaf first. Ties keep the earliest move in
/// generator order.
fn negamax(
    state: &mut GameState,
    depth: u8,
    mut lo: i32,
    hi: i32,
    win: i32,
    nodes: &mut u64,
) -> SearchResult {
    *nodes += 1;

    if state.is_capture() || depth == 0 {
        return SearchResult {
            score: evaluate(state, win),
            pv: Vec::new(),
        };
    }

    let mut moves = Vec::with_capacity(8);
    legal_moves_into(&state.grid, state.us(), &mut moves);
    if moves.is_empty() {
        return SearchResult {
            score: evaluate(state, win),
            pv: Vec::new(),
        };
    }

    let side = state.side_to_move;
    let mut best = SearchResult {
        score: -win - 1,
        pv: Vec::new(),
    };

    for to in moves {
        let child = {
            let mut scope = state.scoped_move(to);
            negamax(&mut scope, depth - 1, -hi, -lo, win, nodes)
        };
        let score = -child.score;

        if score > best.score {
            let mut pv = child.pv;
            pv.push(Move::new(side, to));
            best = SearchResult { score, pv };
        }
        if best.score > lo {
            lo = best.score;
        }
        if lo >= hi {
            break; // Beta cutoff
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
