//! Match runner for King Catch
//!
//! This crate provides infrastructure for:
//! - Playing games between agents from random start positions
//! - Recording every game so it can be replayed
//! - Saving match reports as JSON and rendering them as text
//! - A human agent that reads moves from a terminal
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta against the random baseline on a 6x6 board
//! cargo run -p simulator -- simulate --black random --games 20 --rows 6 --cols 6
//!
//! # Play black against the engine
//! cargo run -p simulator -- play --human black --depth 6
//! ```

mod human;
mod match_runner;
mod results;

pub use human::*;
pub use match_runner::*;
pub use results::*;
