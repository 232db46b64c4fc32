//! Simulation results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use king_core::{KingError, KingResult, Side};

use crate::match_runner::{GameOutcome, MatchConfig, MatchResult, WinReason};

/// A finished match together with the settings that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Name/description of the run
    pub name: String,
    /// The two agents, first agent first
    pub participants: Vec<String>,
    /// Configuration used
    pub config: MatchConfig,
    pub result: MatchResult,
}

impl SimulationReport {
    pub fn new(
        name: &str,
        participants: Vec<String>,
        config: MatchConfig,
        result: MatchResult,
    ) -> Self {
        Self {
            name: name.to_string(),
            participants,
            config,
            result,
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> KingResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| KingError::Io(format!("Failed to serialize: {}", e)))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> KingResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| KingError::Io(format!("Failed to parse: {}", e)))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Simulation: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games, {}x{} board, depth {}\n\n",
            self.config.num_games,
            self.config.game.rows,
            self.config.game.cols,
            self.config.game.search.depth
        ));

        report.push_str("Games:\n");
        report.push_str(&format!(
            "{:>4}  {:<16} {:<16} {:>5}  {}\n",
            "#", "Red", "Black", "Moves", "Outcome"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for (n, game) in self.result.games.iter().enumerate() {
            report.push_str(&format!(
                "{:>4}  {:<16} {:<16} {:>5}  {}\n",
                n + 1,
                game.players[Side::Red.idx()],
                game.players[Side::Black.idx()],
                game.moves.len(),
                describe(&game.outcome)
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "Result for {}: {}-{}-{} (W-L-U), score {:.1}%\n",
            self.participants.first().map(String::as_str).unwrap_or("?"),
            self.result.wins,
            self.result.losses,
            self.result.unfinished,
            self.result.score() * 100.0
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

fn describe(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::Won { winner, reason } => {
            let how = match reason {
                WinReason::Capture => "capture",
                WinReason::Boxed => "boxed in",
                WinReason::Forfeit => "forfeit",
            };
            format!("{winner} wins by {how}")
        }
        GameOutcome::Unfinished => "unfinished".to_string(),
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
