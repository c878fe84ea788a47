//! # party-monopoly
//!
//! Monte Carlo simulator for a simplified, party-themed Monopoly for two to
//! four players. Many randomized games are played to estimate win rates per
//! seat and the distribution of game lengths.
//!
//! ## Design Principles
//!
//! 1. **Data In, Rules In Code**: The board and the chance cards are data
//!    tables loaded once and shared read-only. The rules that interpret them
//!    live in `rules`.
//!
//! 2. **Bankruptcy Is a Value**: Every payment returns
//!    `Result<(), Bankruptcy>`. The first `Err` ends the game; there is no
//!    unwinding and no state is left half-updated.
//!
//! 3. **Deterministic Batches**: Each game draws from its own ChaCha8 stream
//!    derived from the batch seed, so a seeded batch reproduces exactly,
//!    whatever the thread count.
//!
//! ## Modules
//!
//! - `core`: Player accounts, RNG, configuration, errors
//! - `board`: Squares, chance cards, data loading
//! - `rules`: Die, chance deck, turn resolution, turn log
//! - `simulation`: Batch driver and aggregated report

pub mod board;
pub mod core;
pub mod rules;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    Bankruptcy, ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap,
};

pub use crate::board::{Board, ChanceCard, GameData, Square, SquareKind};

pub use crate::rules::{ChanceDeck, DieFace, Game, GameEnd, GameResult, TurnEvent};

pub use crate::simulation::{SimulationConfig, SimulationReport, Simulator};
