//! Batch simulation configuration.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameConfig};

/// Names handed out to seats when none are given.
pub const DEFAULT_PLAYER_NAMES: [&str; 4] = ["Son", "Dad", "Mum", "Gran"];

/// Log progress after this many games.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Configuration for a batch of independent games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub iterations: u64,

    /// Batch seed. `None` draws one from entropy when the batch starts.
    pub seed: Option<u64>,

    /// Log progress every this many games. 0 disables progress logging.
    pub progress_interval: u64,

    /// Seat names in turn order; one per player.
    pub player_names: Vec<String>,

    /// Rules for every game of the batch.
    pub game: GameConfig,
}

impl SimulationConfig {
    /// A single game with `player_count` players and default names.
    pub fn new(player_count: usize) -> Result<Self, ConfigError> {
        let game = GameConfig::new(player_count)?;
        let player_names = DEFAULT_PLAYER_NAMES[..player_count]
            .iter()
            .map(|name| (*name).to_owned())
            .collect();

        Ok(Self {
            iterations: 1,
            seed: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            player_names,
            game,
        })
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Fix the batch seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the progress logging interval.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Replace the seat names.
    ///
    /// The count must match the configured player count; this is checked
    /// when the simulator is built.
    #[must_use]
    pub fn with_player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the rules configuration.
    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.game.player_count
    }
}
