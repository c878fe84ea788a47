//! Batch driver.
//!
//! Games are independent: each gets its own players, its own shuffled deck
//! and its own RNG stream derived from the batch seed and the game index.
//! That makes the batch embarrassingly parallel and keeps the result of a
//! seeded run identical however rayon schedules the games.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::info;

use super::config::SimulationConfig;
use super::report::SimulationReport;
use crate::board::GameData;
use crate::core::{ConfigError, GameRng};
use crate::rules::{Game, GameResult};

/// Runs batches of games against shared game data.
#[derive(Clone, Debug)]
pub struct Simulator {
    data: Arc<GameData>,
    config: SimulationConfig,
}

impl Simulator {
    /// Create a simulator.
    ///
    /// Fails if the number of player names does not match the configured
    /// player count.
    pub fn new(data: Arc<GameData>, config: SimulationConfig) -> Result<Self, ConfigError> {
        if config.player_names.len() != config.player_count() {
            return Err(ConfigError::InvalidPlayerCount(config.player_names.len()));
        }
        Ok(Self { data, config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Set up game number `index` of the batch seeded with `seed`.
    pub fn new_game(&self, seed: u64, index: u64) -> Result<Game, ConfigError> {
        Game::setup(
            Arc::clone(&self.data),
            self.config.game.clone(),
            &self.config.player_names,
            GameRng::for_game(seed, index),
        )
    }

    /// Play game number `index` of the batch seeded with `seed`.
    pub fn play_game(&self, seed: u64, index: u64) -> Result<GameResult, ConfigError> {
        Ok(self.new_game(seed, index)?.play())
    }

    /// Play the first game of the batch with the event log switched on.
    ///
    /// Returns the finished game so callers can inspect the log and the
    /// final player state.
    pub fn play_single(&self) -> Result<(Game, GameResult), ConfigError> {
        let seed = self.resolve_seed();
        let mut game = self.new_game(seed, 0)?.with_event_log();
        let result = game.play();
        Ok((game, result))
    }

    /// Play the whole batch and aggregate the results.
    pub fn run(&self) -> Result<SimulationReport, ConfigError> {
        let seed = self.resolve_seed();
        let iterations = self.config.iterations;
        let interval = self.config.progress_interval;
        let players = &self.config.player_names;
        info!(seed, games = iterations, players = players.len(), "starting simulation");

        let played = AtomicU64::new(0);
        let report = (0..iterations)
            .into_par_iter()
            .map(|index| -> Result<GameResult, ConfigError> {
                let result = self.play_game(seed, index)?;
                let done = played.fetch_add(1, Ordering::Relaxed) + 1;
                if interval > 0 && done % interval == 0 {
                    info!("played {done} of {iterations} games");
                }
                Ok(result)
            })
            .try_fold(
                || SimulationReport::new(seed, players),
                |mut report, result: Result<GameResult, ConfigError>| {
                    report.record(&result?);
                    Ok::<_, ConfigError>(report)
                },
            )
            .try_reduce(|| SimulationReport::new(seed, players), |a, b| Ok(a.merge(b)))?;

        info!(games = report.games, mean_turns = report.mean_turns(), "simulation finished");
        Ok(report)
    }

    fn resolve_seed(&self) -> u64 {
        self.config.seed.unwrap_or_else(|| {
            let seed = GameRng::entropy_seed();
            info!(seed, "no seed given, drew one from entropy");
            seed
        })
    }
}
