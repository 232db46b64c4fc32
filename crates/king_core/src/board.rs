use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::error::{KingError, KingResult};
use crate::grid::FogGrid;
use crate::movegen::mobility;
use crate::types::*;

/// Full game state: fog grid, departure trail, both kings and the side to move.
///
/// This is the unit handed to the search. It is mutated in place by
/// [`GameState::do_move`] / [`GameState::undo_move`], which are exact inverses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: FogGrid,
    /// Cells left by either king, most recent last.
    pub traces: Vec<Coord>,
    /// King coordinates indexed by `Side::idx()`.
    pub kings: [Coord; 2],
    pub side_to_move: Side,
}

/// Result of a checked move on the live board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Game goes on.
    Continue,
    /// Mover landed on the opponent king.
    Capture,
    /// Opponent has no unvisited neighbour left.
    Boxed,
}

/// How much of the board the side to move may see.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// A view of the board from the side to move. `them` is withheld when hidden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: FogGrid,
    pub traces: Vec<Coord>,
    pub side_to_move: Side,
    pub us: Coord,
    pub them: Option<Coord>,
}

impl Snapshot {
    /// Rebuild a searchable state. Fails when the opponent king is hidden.
    pub fn resolve(self) -> KingResult<GameState> {
        let them = self.them.ok_or(KingError::OpponentHidden)?;
        let mut kings = [self.us; 2];
        kings[self.side_to_move.other().idx()] = them;
        let state = GameState {
            grid: self.grid,
            traces: self.traces,
            kings,
            side_to_move: self.side_to_move,
        };
        state.validate()?;
        Ok(state)
    }
}

impl GameState {
    /// Fresh game with every cell fogged.
    pub fn new(rows: i32, cols: i32, red: Coord, black: Coord, side_to_move: Side) -> KingResult<Self> {
        if !valid_side(rows) || !valid_side(cols) {
            return Err(KingError::InvalidBoard { rows, cols });
        }
        let state = GameState {
            grid: FogGrid::new(rows, cols),
            traces: Vec::new(),
            kings: [red, black],
            side_to_move,
        };
        state.validate()?;
        if red == black {
            return Err(KingError::KingsOverlap(red));
        }
        Ok(state)
    }

    /// Checks both kings are on the board.
    pub fn validate(&self) -> KingResult<()> {
        for king in self.kings {
            if !self.in_bounds(king) {
                return Err(KingError::OutOfBounds(king));
            }
        }
        Ok(())
    }

    #[inline(always)]
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    #[inline(always)]
    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    #[inline(always)]
    pub fn in_bounds(&self, c: Coord) -> bool {
        self.grid.in_bounds(c)
    }

    #[inline(always)]
    pub fn king(&self, side: Side) -> Coord {
        self.kings[side.idx()]
    }

    /// King of the side to move.
    #[inline(always)]
    pub fn us(&self) -> Coord {
        self.kings[self.side_to_move.idx()]
    }

    /// King of the side not to move.
    #[inline(always)]
    pub fn them(&self) -> Coord {
        self.kings[self.side_to_move.other().idx()]
    }

    /// Both kings on one cell: the side to move has just been caught.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.kings[0] == self.kings[1]
    }

    /// Number of moves applied since the state was created.
    pub fn ply(&self) -> usize {
        self.traces.len()
    }

    pub fn cell(&self, c: Coord) -> KingResult<CellState> {
        if !self.in_bounds(c) {
            return Err(KingError::OutOfBounds(c));
        }
        Ok(if c == self.king(Side::Red) {
            CellState::OccupiedByRed
        } else if c == self.king(Side::Black) {
            CellState::OccupiedByBlack
        } else if self.grid.is_visited(c) {
            CellState::Visited
        } else {
            CellState::Unvisited
        })
    }

    /// Apply a move of the side to move. No legality check: the search only
    /// feeds generator output through here.
    #[inline]
    pub fn do_move(&mut self, to: Coord) {
        debug_assert!(self.in_bounds(to), "destination {to} off the board");
        let side = self.side_to_move;
        let from = self.kings[side.idx()];
        self.traces.push(from);
        self.grid.visit(from);
        self.kings[side.idx()] = to;
        self.side_to_move = side.other();
    }

    /// Exact inverse of [`GameState::do_move`].
    #[inline]
    pub fn undo_move(&mut self) -> KingResult<()> {
        let from = self.traces.pop().ok_or(KingError::UndoUnderflow)?;
        self.side_to_move = self.side_to_move.other();
        self.grid.unvisit(from);
        self.kings[self.side_to_move.idx()] = from;
        Ok(())
    }

    /// Apply `to` and take it back when the returned scope is dropped.
    #[inline]
    pub fn scoped_move(&mut self, to: Coord) -> MoveScope<'_> {
        self.do_move(to);
        MoveScope { state: self }
    }

    /// Checked move for the live game.
    pub fn play(&mut self, mv: Move) -> KingResult<PlayOutcome> {
        if mv.side != self.side_to_move {
            return Err(KingError::WrongSide {
                expected: self.side_to_move,
                got: mv.side,
            });
        }
        if !self.in_bounds(mv.to) {
            return Err(KingError::OutOfBounds(mv.to));
        }
        if !self.us().is_adjacent(mv.to) || self.grid.is_visited(mv.to) {
            return Err(KingError::IllegalMove(mv));
        }

        self.do_move(mv.to);

        if self.is_capture() {
            return Ok(PlayOutcome::Capture);
        }
        if mobility(&self.grid, self.us()) == 0 {
            return Ok(PlayOutcome::Boxed);
        }
        Ok(PlayOutcome::Continue)
    }

    /// What the side to move is allowed to see.
    pub fn snapshot(&self, visibility: Visibility) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            traces: self.traces.clone(),
            side_to_move: self.side_to_move,
            us: self.us(),
            them: match visibility {
                Visibility::Visible => Some(self.them()),
                Visibility::Hidden => None,
            },
        }
    }
}

fn valid_side(n: i32) -> bool {
    (MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&n)
}

/// Guard returned by [`GameState::scoped_move`]. Undoes the move on drop.
pub struct MoveScope<'a> {
    state: &'a mut GameState,
}

impl Deref for MoveScope<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for MoveScope<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for MoveScope<'_> {
    fn drop(&mut self) {
        // The scope pushed exactly one trace, so there is always one to pop.
        let restored = self.state.undo_move();
        debug_assert!(restored.is_ok());
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            f,
            &self.grid,
            Some(self.king(Side::Red)),
            Some(self.king(Side::Black)),
        )
    }
}

/// Renders only what the side to move can see. A hidden king shows as fog.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, black) = match self.side_to_move {
            Side::Red => (Some(self.us), self.them),
            Side::Black => (self.them, Some(self.us)),
        };
        render(f, &self.grid, red, black)
    }
}

fn render(
    f: &mut fmt::Formatter<'_>,
    grid: &FogGrid,
    red: Option<Coord>,
    black: Option<Coord>,
) -> fmt::Result {
    write!(f, "   ")?;
    for col in 0..grid.cols() {
        write!(f, "{col:^3}")?;
    }
    writeln!(f)?;
    for row in 0..grid.rows() {
        write!(f, "{row:>2} ")?;
        for col in 0..grid.cols() {
            let c = Coord::new(row, col);
            let glyph = if Some(c) == red {
                " K "
            } else if Some(c) == black {
                " k "
            } else if grid.is_visited(c) {
                " - "
            } else {
                " * "
            };
            f.write_str(glyph)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
