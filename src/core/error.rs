//! Error types.
//!
//! Two kinds of failure exist and they are kept apart on purpose:
//!
//! - [`Bankruptcy`]: a player's balance dropped to zero or below. This is the
//!   routine way a game ends. It travels up through nested payment logic as
//!   the `Err` side of a `Result` and is consumed by [`Game::play`].
//! - [`ConfigError`]: malformed board/card data or an unsupported player
//!   count. These abort the run.
//!
//! [`Game::play`]: crate::rules::Game::play

use std::path::PathBuf;

use thiserror::Error;

use super::player::PlayerId;

/// A player's balance is no longer positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{player} is bankrupt (balance {balance})")]
pub struct Bankruptcy {
    /// The player who went bankrupt.
    pub player: PlayerId,
    /// Balance right after the payment that caused the bankruptcy.
    pub balance: i64,
}

/// Unrecoverable configuration or data error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Games support two to four players.
    #[error("unsupported player count {0}: expected 2 to 4")]
    InvalidPlayerCount(usize),

    /// A player was seated out of turn order.
    #[error("seat {seat} holds {player}")]
    SeatMismatch { seat: usize, player: PlayerId },

    /// A chance card record has an unknown type or is missing a field.
    #[error("invalid chance card: {0}")]
    InvalidCard(String),

    /// The board table is inconsistent.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// A data file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data table is not valid JSON for its record type.
    #[error("failed to parse game data: {0}")]
    Parse(#[from] serde_json::Error),
}
