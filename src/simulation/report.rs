//! Aggregated batch results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rules::{GameEnd, GameResult};

/// Win counts and game-length distribution over a batch of games.
///
/// Every player sharing a tied win is credited with a win, so the win
/// counts can add up to more than `games`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Batch seed, for reproducing the run.
    pub seed: u64,

    /// Games played.
    pub games: u64,

    /// Seat names in turn order.
    pub players: Vec<String>,

    /// Wins per player name.
    pub wins: BTreeMap<String, u64>,

    /// Games won jointly by more than one player.
    pub ties: u64,

    /// Games stopped by the turn limit rather than a bankruptcy.
    pub unfinished: u64,

    /// Number of games per game length in turns.
    pub turn_histogram: BTreeMap<u32, u64>,
}

impl SimulationReport {
    /// Create an empty report.
    pub fn new(seed: u64, players: &[String]) -> Self {
        Self {
            seed,
            players: players.to_vec(),
            wins: players.iter().map(|name| (name.clone(), 0)).collect(),
            ..Self::default()
        }
    }

    /// Add one game.
    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        for name in &result.winner_names {
            *self.wins.entry(name.clone()).or_default() += 1;
        }
        if result.is_tie() {
            self.ties += 1;
        }
        if result.end == GameEnd::TurnLimit {
            self.unfinished += 1;
        }
        *self.turn_histogram.entry(result.turn_count).or_default() += 1;
    }

    /// Combine two partial reports of the same batch.
    #[must_use]
    pub fn merge(mut self, other: SimulationReport) -> Self {
        self.games += other.games;
        self.ties += other.ties;
        self.unfinished += other.unfinished;
        for (name, wins) in other.wins {
            *self.wins.entry(name).or_default() += wins;
        }
        for (turns, count) in other.turn_histogram {
            *self.turn_histogram.entry(turns).or_default() += count;
        }
        if self.players.is_empty() {
            self.players = other.players;
        }
        self
    }

    /// Wins for a player.
    #[must_use]
    pub fn wins_for(&self, name: &str) -> u64 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Percentage of games won (or shared) by a player.
    #[must_use]
    pub fn win_percentage(&self, name: &str) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins_for(name) as f64 * 100.0 / self.games as f64
        }
    }

    /// Average game length in turns.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let total: u64 = self
            .turn_histogram
            .iter()
            .map(|(turns, count)| u64::from(*turns) * count)
            .sum();
        total as f64 / self.games as f64
    }

    /// Shortest and longest game.
    #[must_use]
    pub fn turn_range(&self) -> Option<(u32, u32)> {
        let shortest = self.turn_histogram.keys().next()?;
        let longest = self.turn_histogram.keys().next_back()?;
        Some((*shortest, *longest))
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games played: {} (seed {})", self.games, self.seed)?;
        writeln!(f, "Total wins:")?;
        for name in &self.players {
            writeln!(
                f,
                "  {:<10} {:>8} ({:.2}%)",
                name,
                self.wins_for(name),
                self.win_percentage(name)
            )?;
        }
        writeln!(f, "Ties: {}", self.ties)?;
        if self.unfinished > 0 {
            writeln!(f, "Stopped at turn limit: {}", self.unfinished)?;
        }
        writeln!(f, "Mean game length: {:.2} turns", self.mean_turns())?;
        writeln!(f, "Game length distribution:")?;
        for (turns, count) in &self.turn_histogram {
            writeln!(f, "  {:>5} turns: {}", turns, count)?;
        }
        Ok(())
    }
}
