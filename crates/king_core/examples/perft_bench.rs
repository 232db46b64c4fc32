//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p king_core -- [depth] [rows cols]
//!
//! Examples:
//!   # Default: depth 7 over the standard start positions
//!   cargo flamegraph --example perft_bench -p king_core
//!
//!   # Custom depth on a 10x10 board, kings in opposite corners
//!   cargo flamegraph --example perft_bench -p king_core -- 8 10 10

use king_core::{Coord, GameState, Side, perft};
use std::env;
use std::time::{Duration, Instant};

/// Start positions: (name, rows, cols, red, black)
const TEST_POSITIONS: &[(&str, i32, i32, (i32, i32), (i32, i32))] = &[
    ("Opposite corners 8x8", 8, 8, (0, 0), (7, 7)),
    ("Centre vs corner 8x8", 8, 8, (3, 3), (7, 7)),
    ("Kings adjacent 8x8", 8, 8, (3, 3), (4, 4)),
    ("Narrow 3x12", 3, 12, (1, 0), (1, 11)),
    ("Small 5x5", 5, 5, (2, 2), (0, 4)),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);
    let rows: Option<i32> = args.get(2).and_then(|s| s.parse().ok());
    let cols: Option<i32> = args.get(3).and_then(|s| s.parse().ok());

    match (rows, cols) {
        (Some(rows), Some(cols)) => run_single_board(rows, cols, depth),
        _ => run_all_positions(depth),
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_board(rows: i32, cols: i32, depth: u8) {
    let black = Coord::new(rows - 1, cols - 1);
    let mut state = match GameState::new(rows, cols, Coord::new(0, 0), black, Side::Red) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Bad board: {e}");
            return;
        }
    };

    println!("Board: {rows}x{cols}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&mut state, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&mut state, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for &(name, rows, cols, red, black) in TEST_POSITIONS {
        let Ok(mut state) = GameState::new(
            rows,
            cols,
            Coord::new(red.0, red.1),
            Coord::new(black.0, black.1),
            Side::Red,
        ) else {
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut state, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
