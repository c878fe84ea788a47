//! Loading of the shared game data tables.
//!
//! `GameData` bundles the board and the chance-card table. It is loaded once
//! per process, validated as a whole, and then shared read-only between
//! games (usually behind an `Arc`).

use std::fs;
use std::path::Path;

use tracing::debug;

use super::chance::{parse_chance_cards, ChanceCard};
use super::track::Board;
use crate::core::ConfigError;

/// Built-in 24-square board.
pub const DEFAULT_SQUARES: &str = include_str!("../../data/squares.json");

/// Built-in chance-card table.
pub const DEFAULT_CHANCE_CARDS: &str = include_str!("../../data/chance_cards.json");

/// Immutable board and card data shared by every game.
#[derive(Clone, Debug)]
pub struct GameData {
    pub board: Board,

    /// Unshuffled card table; each game shuffles its own copy.
    pub chance_cards: Vec<ChanceCard>,
}

impl GameData {
    /// Combine a board and a card table.
    ///
    /// Fails if the card table is empty or a "goto-and-get" card names a
    /// colour that has no square on the board.
    pub fn new(board: Board, chance_cards: Vec<ChanceCard>) -> Result<Self, ConfigError> {
        if chance_cards.is_empty() {
            return Err(ConfigError::InvalidCard("chance card table is empty".into()));
        }

        for card in &chance_cards {
            if let ChanceCard::GotoAndGet { colour } = card {
                if board.colour_squares(colour).next().is_none() {
                    return Err(ConfigError::InvalidCard(format!(
                        "goto-and-get card targets colour `{colour}` which has no squares"
                    )));
                }
            }
        }

        Ok(Self { board, chance_cards })
    }

    /// Parse both tables from JSON text.
    pub fn from_json(squares: &str, chance_cards: &str) -> Result<Self, ConfigError> {
        Self::new(Board::from_json(squares)?, parse_chance_cards(chance_cards)?)
    }

    /// The built-in board and card table.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_SQUARES, DEFAULT_CHANCE_CARDS)
    }

    /// Load tables from files. `None` selects the built-in table.
    pub fn load(squares: Option<&Path>, chance_cards: Option<&Path>) -> Result<Self, ConfigError> {
        let squares = match squares {
            Some(path) => read(path)?,
            None => DEFAULT_SQUARES.to_owned(),
        };
        let chance_cards = match chance_cards {
            Some(path) => read(path)?,
            None => DEFAULT_CHANCE_CARDS.to_owned(),
        };

        let data = Self::from_json(&squares, &chance_cards)?;
        debug!(
            squares = data.board.len(),
            chance_cards = data.chance_cards.len(),
            "loaded game data"
        );
        Ok(data)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
