//! The six-sided die.
//!
//! One face reads "chance" instead of 3: rolling it draws a chance card and
//! the player does not move.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// One face of the die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DieFace {
    Number(u8),
    Chance,
}

/// All faces, each equally likely.
pub const DIE_FACES: [DieFace; 6] = [
    DieFace::Number(1),
    DieFace::Number(2),
    DieFace::Chance,
    DieFace::Number(4),
    DieFace::Number(5),
    DieFace::Number(6),
];

/// Largest number on the die.
pub const MAX_PIPS: u8 = 6;

/// Roll the die.
pub fn roll(rng: &mut GameRng) -> DieFace {
    DIE_FACES[rng.gen_range_usize(0..DIE_FACES.len())]
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieFace::Number(n) => write!(f, "{n}"),
            DieFace::Chance => f.write_str("chance"),
        }
    }
}
