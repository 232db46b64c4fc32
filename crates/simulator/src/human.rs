//! Human player reading moves from a text stream.

use std::io::{BufRead, Write};

use king_core::{
    legal_moves, Agent, Coord, GameState, KingError, KingResult, Move, MoveChoice, Visibility,
};

/// Prompts on `output` and reads `row col` lines from `input`.
///
/// Unparseable or illegal entries are reported and asked again. Typing
/// `resign` gives up the game.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
    visibility: Visibility,
}

impl<R: BufRead + Send, W: Write + Send> HumanAgent<R, W> {
    pub fn new(input: R, output: W, visibility: Visibility) -> Self {
        Self {
            input,
            output,
            visibility,
        }
    }

    fn read_line(&mut self) -> KingResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(KingError::Input("input closed".to_string()));
        }
        Ok(line)
    }
}

/// Parse `row col`, `row,col` or `(row, col)`.
pub fn parse_coord(text: &str) -> Option<Coord> {
    let cleaned: String = text
        .chars()
        .map(|ch| if ch == ',' || ch == '(' || ch == ')' { ' ' } else { ch })
        .collect();
    let mut parts = cleaned.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(row, col))
}

impl<R: BufRead + Send, W: Write + Send> Agent for HumanAgent<R, W> {
    fn choose_move(&mut self, state: &GameState) -> KingResult<MoveChoice> {
        let moves = legal_moves(&state.grid, state.us());
        if moves.is_empty() {
            return Ok(MoveChoice::NoMoveAvailable);
        }

        write!(self.output, "\n{}", state.snapshot(self.visibility))?;
        loop {
            write!(
                self.output,
                "{} to move from {} (row col): ",
                state.side_to_move,
                state.us()
            )?;
            self.output.flush()?;

            let line = self.read_line()?;
            let line = line.trim();
            if line.eq_ignore_ascii_case("resign") {
                return Ok(MoveChoice::NoMoveAvailable);
            }

            match parse_coord(line) {
                Some(to) if moves.contains(&to) => {
                    return Ok(MoveChoice::Play(Move::new(state.side_to_move, to)));
                }
                Some(to) => writeln!(self.output, "{to} is not a legal move")?,
                None => writeln!(self.output, "Could not read '{line}', expected: row col")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
#[path = "human_tests.rs"]
mod human_tests;
