//! The chance deck.
//!
//! Cards are drawn from the top and go straight back underneath, so the deck
//! never shrinks and its order, fixed by the initial shuffle, repeats for
//! the rest of the game.

use crate::board::ChanceCard;
use crate::core::{ConfigError, GameRng};

/// Cyclic chance deck.
#[derive(Clone, Debug)]
pub struct ChanceDeck {
    cards: Vec<ChanceCard>,
    /// Position of the top card.
    top: usize,
}

impl ChanceDeck {
    /// Create a deck in the given order. The first card is on top.
    pub fn new(cards: Vec<ChanceCard>) -> Result<Self, ConfigError> {
        if cards.is_empty() {
            return Err(ConfigError::InvalidCard("chance deck is empty".into()));
        }
        Ok(Self { cards, top: 0 })
    }

    /// Shuffle a copy of `cards` into a new deck.
    pub fn shuffled(cards: &[ChanceCard], rng: &mut GameRng) -> Result<Self, ConfigError> {
        let mut cards = cards.to_vec();
        rng.shuffle(&mut cards);
        Self::new(cards)
    }

    /// Take the top card and put it back at the bottom.
    pub fn draw(&mut self) -> ChanceCard {
        let card = self.cards[self.top].clone();
        self.top = (self.top + 1) % self.cards.len();
        card
    }

    /// Number of cards; constant for the life of the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false: empty decks are rejected on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &ChanceCard> {
        self.cards[self.top..].iter().chain(self.cards[..self.top].iter())
    }
}
