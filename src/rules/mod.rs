//! Rules engine.
//!
//! - `die`: the six-faced die with a "chance" face
//! - `deck`: the cyclic chance deck
//! - `engine`: `Game`, turn resolution and winner ranking
//! - `event`: optional structured turn log

pub mod deck;
pub mod die;
pub mod engine;
pub mod event;

pub use deck::ChanceDeck;
pub use die::{DieFace, DIE_FACES};
pub use engine::{Game, GameEnd, GameResult};
pub use event::{EventKind, TurnEvent};
