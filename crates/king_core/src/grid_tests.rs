use super::*;

#[test]
fn test_new_grid_is_fogged() {
    let grid = FogGrid::new(8, 8);
    assert_eq!(grid.count_visited(), 0);
    assert!(!grid.is_visited(Coord::new(3, 4)));
}

#[test]
fn test_visit_and_unvisit() {
    let mut grid = FogGrid::new(5, 7);
    let c = Coord::new(4, 6);
    grid.visit(c);
    assert!(grid.is_visited(c));
    assert_eq!(grid.count_visited(), 1);
    grid.unvisit(c);
    assert!(!grid.is_visited(c));
    assert_eq!(grid, FogGrid::new(5, 7));
}

#[test]
fn test_large_grid_spans_words() {
    // 12x12 = 144 cells, three words
    let mut grid = FogGrid::new(12, 12);
    grid.visit(Coord::new(0, 0));
    grid.visit(Coord::new(5, 4)); // bit 64
    grid.visit(Coord::new(11, 11)); // bit 143
    assert_eq!(grid.count_visited(), 3);
    let visited: Vec<Coord> = grid.visited().collect();
    assert_eq!(
        visited,
        vec![Coord::new(0, 0), Coord::new(5, 4), Coord::new(11, 11)]
    );
}

#[test]
fn test_bounds() {
    let grid = FogGrid::new(3, 4);
    assert!(grid.in_bounds(Coord::new(2, 3)));
    assert!(!grid.in_bounds(Coord::new(3, 0)));
    assert!(!grid.in_bounds(Coord::new(0, 4)));
    assert!(!grid.in_bounds(Coord::new(-1, 0)));
}

#[test]
fn test_largest_board_corner() {
    let side = crate::types::MAX_BOARD_SIDE;
    let corner = Coord::new(side - 1, side - 1);
    let mut grid = FogGrid::new(side, side);
    grid.visit(corner);
    assert!(grid.is_visited(corner));
    assert_eq!(grid.visited().collect::<Vec<_>>(), vec![corner]);
}
