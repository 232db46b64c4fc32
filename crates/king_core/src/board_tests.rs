use super::*;

fn start(rows: i32, cols: i32, red: (i32, i32), black: (i32, i32)) -> GameState {
    GameState::new(
        rows,
        cols,
        Coord::new(red.0, red.1),
        Coord::new(black.0, black.1),
        Side::Red,
    )
    .unwrap()
}

#[test]
fn test_new_rejects_bad_input() {
    assert_eq!(
        GameState::new(1, 5, Coord::new(0, 0), Coord::new(0, 1), Side::Red),
        Err(KingError::InvalidBoard { rows: 1, cols: 5 })
    );
    assert_eq!(
        GameState::new(4, 4, Coord::new(0, 4), Coord::new(1, 1), Side::Red),
        Err(KingError::OutOfBounds(Coord::new(0, 4)))
    );
    assert_eq!(
        GameState::new(4, 4, Coord::new(2, 2), Coord::new(2, 2), Side::Red),
        Err(KingError::KingsOverlap(Coord::new(2, 2)))
    );
}

#[test]
fn test_do_move_updates_every_field() {
    let mut s = start(5, 5, (0, 0), (4, 4));
    s.do_move(Coord::new(1, 1));
    assert_eq!(s.king(Side::Red), Coord::new(1, 1));
    assert_eq!(s.traces, vec![Coord::new(0, 0)]);
    assert!(s.grid.is_visited(Coord::new(0, 0)));
    assert_eq!(s.side_to_move, Side::Black);
    assert_eq!(s.us(), Coord::new(4, 4));
    assert_eq!(s.them(), Coord::new(1, 1));
}

#[test]
fn test_do_undo_is_identity() {
    let mut s = start(6, 5, (2, 2), (5, 4));
    s.do_move(Coord::new(3, 3));
    s.do_move(Coord::new(4, 4));
    let before = s.clone();
    for to in crate::movegen::legal_moves(&s.grid, s.us()) {
        s.do_move(to);
        s.undo_move().unwrap();
        assert_eq!(s, before);
    }
}

#[test]
fn test_undo_without_move_fails() {
    let mut s = start(3, 3, (0, 0), (2, 2));
    assert_eq!(s.undo_move(), Err(KingError::UndoUnderflow));
    s.do_move(Coord::new(0, 1));
    assert!(s.undo_move().is_ok());
    assert_eq!(s.undo_move(), Err(KingError::UndoUnderflow));
}

#[test]
fn test_scoped_move_restores_on_drop() {
    let mut s = start(4, 4, (0, 0), (3, 3));
    let before = s.clone();
    {
        let mut child = s.scoped_move(Coord::new(1, 1));
        assert_eq!(child.side_to_move, Side::Black);
        let grandchild = child.scoped_move(Coord::new(2, 2));
        assert_eq!(grandchild.ply(), 2);
    }
    assert_eq!(s, before);
}

#[test]
fn test_play_rejects_wrong_side() {
    let mut s = start(4, 4, (0, 0), (3, 3));
    let err = s.play(Move::new(Side::Black, Coord::new(2, 2))).unwrap_err();
    assert_eq!(
        err,
        KingError::WrongSide {
            expected: Side::Red,
            got: Side::Black
        }
    );
}

#[test]
fn test_play_rejects_illegal_destinations() {
    let mut s = start(4, 4, (0, 0), (3, 3));
    // too far
    let far = Move::new(Side::Red, Coord::new(2, 2));
    assert_eq!(s.play(far), Err(KingError::IllegalMove(far)));
    // off the board
    let off = Move::new(Side::Red, Coord::new(-1, 0));
    assert_eq!(s.play(off), Err(KingError::OutOfBounds(Coord::new(-1, 0))));
    // staying put
    let stay = Move::new(Side::Red, Coord::new(0, 0));
    assert_eq!(s.play(stay), Err(KingError::IllegalMove(stay)));

    // back onto a visited cell
    s.play(Move::new(Side::Red, Coord::new(0, 1))).unwrap();
    s.play(Move::new(Side::Black, Coord::new(3, 2))).unwrap();
    let back = Move::new(Side::Red, Coord::new(0, 0));
    assert_eq!(s.play(back), Err(KingError::IllegalMove(back)));
    assert_eq!(s.ply(), 2);
}

#[test]
fn test_play_capture() {
    let mut s = start(4, 4, (1, 1), (2, 2));
    let outcome = s.play(Move::new(Side::Red, Coord::new(2, 2))).unwrap();
    assert_eq!(outcome, PlayOutcome::Capture);
}

#[test]
fn test_play_boxes_in_opponent() {
    // Black in the corner of a 3x3 board; (0,1) and (1,1) already visited
    let mut s = start(3, 3, (2, 1), (0, 0));
    s.grid.visit(Coord::new(0, 1));
    s.grid.visit(Coord::new(1, 1));
    let outcome = s.play(Move::new(Side::Red, Coord::new(2, 2))).unwrap();
    // Black still has (1,0)
    assert_eq!(outcome, PlayOutcome::Continue);
    s.play(Move::new(Side::Black, Coord::new(1, 0))).unwrap();
    // Red at (2,2): neighbours (1,1) visited, (1,2), (2,1) visited
    let outcome = s.play(Move::new(Side::Red, Coord::new(1, 2))).unwrap();
    // Black at (1,0): (0,0),(0,1),(1,1),(2,1) visited, (2,0) open
    assert_eq!(outcome, PlayOutcome::Continue);
    let outcome = s.play(Move::new(Side::Black, Coord::new(2, 0))).unwrap();
    // Red at (1,2): (0,1),(1,1),(2,1),(2,2) visited, (0,2) open
    assert_eq!(outcome, PlayOutcome::Continue);
    let outcome = s.play(Move::new(Side::Red, Coord::new(0, 2))).unwrap();
    // Black at (2,0): (1,0),(1,1),(2,1) all visited
    assert_eq!(outcome, PlayOutcome::Boxed);
}

#[test]
fn test_cell_states() {
    let mut s = start(3, 3, (0, 0), (2, 2));
    s.do_move(Coord::new(0, 1));
    assert_eq!(s.cell(Coord::new(0, 1)).unwrap(), CellState::OccupiedByRed);
    assert_eq!(s.cell(Coord::new(2, 2)).unwrap(), CellState::OccupiedByBlack);
    assert_eq!(s.cell(Coord::new(0, 0)).unwrap(), CellState::Visited);
    assert_eq!(s.cell(Coord::new(1, 1)).unwrap(), CellState::Unvisited);
    assert!(s.cell(Coord::new(3, 0)).is_err());
}

#[test]
fn test_visible_snapshot_resolves() {
    let mut s = start(5, 5, (0, 0), (4, 4));
    s.do_move(Coord::new(1, 0));
    let snap = s.snapshot(Visibility::Visible);
    assert_eq!(snap.us, Coord::new(4, 4));
    assert_eq!(snap.them, Some(Coord::new(1, 0)));
    assert_eq!(snap.resolve().unwrap(), s);
}

#[test]
fn test_hidden_snapshot_withholds_opponent() {
    let s = start(5, 5, (0, 0), (4, 4));
    let snap = s.snapshot(Visibility::Hidden);
    assert_eq!(snap.them, None);
    assert_eq!(snap.resolve(), Err(KingError::OpponentHidden));
}

#[test]
fn test_display_glyphs() {
    let mut s = start(2, 3, (0, 0), (1, 2));
    s.do_move(Coord::new(0, 1));
    let text = s.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], " 0  -  K  * ");
    assert_eq!(lines[2], " 1  *  *  k ");
}

#[test]
fn test_hidden_snapshot_display_fogs_opponent_king() {
    let mut s = start(2, 3, (0, 0), (1, 2));
    s.do_move(Coord::new(0, 1));
    let text = s.snapshot(Visibility::Hidden).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], " 0  -  *  * ");
    assert_eq!(lines[2], " 1  *  *  k ");
    assert_eq!(s.snapshot(Visibility::Visible).to_string(), s.to_string());
}

#[test]
fn test_new_rejects_oversized_board() {
    let side = MAX_BOARD_SIDE + 1;
    assert_eq!(
        GameState::new(side, 4, Coord::new(0, 0), Coord::new(0, 1), Side::Red),
        Err(KingError::InvalidBoard { rows: side, cols: 4 })
    );
}
