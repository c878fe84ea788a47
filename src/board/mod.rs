//! Board and chance-card data.
//!
//! ## Key Types
//!
//! - `Square` / `SquareKind`: static square data and landing behaviour
//! - `Board`: validated circular track
//! - `ChanceCard`: closed set of card effects
//! - `GameData`: board plus card table, shared read-only by all games

pub mod chance;
pub mod data;
pub mod square;
pub mod track;

pub use chance::{parse_chance_cards, ChanceCard, ChanceCardRecord};
pub use data::{GameData, DEFAULT_CHANCE_CARDS, DEFAULT_SQUARES};
pub use square::{Square, SquareKind};
pub use track::Board;
