//! Core types: players, RNG, configuration and errors.
//!
//! Nothing in here knows about the board; the rules engine in
//! [`crate::rules`] combines these with [`crate::board`] data.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{Bankruptcy, ConfigError};
pub use player::{JailRelease, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
