//! Board squares.
//!
//! A `Square` is static board data. Its name doubles as the key for
//! ownership and for special behaviour: a handful of reserved names mark the
//! squares that cannot be bought.

use serde::{Deserialize, Serialize};

/// What happens when a player lands on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareKind {
    Go,
    Jail,
    GoToJail,
    FreeParking,
    Chance,
    PartyBox,
    /// Anything else can be bought.
    Property,
}

impl SquareKind {
    /// Classify a square by its name.
    #[must_use]
    pub fn of(name: &str) -> Self {
        match name {
            "Go" => SquareKind::Go,
            "Jail" => SquareKind::Jail,
            "Go to Jail" => SquareKind::GoToJail,
            "Free Parking" => SquareKind::FreeParking,
            "Chance" => SquareKind::Chance,
            "Party Box" => SquareKind::PartyBox,
            _ => SquareKind::Property,
        }
    }

    /// True for squares that can be owned.
    #[must_use]
    pub fn is_property(self) -> bool {
        self == SquareKind::Property
    }
}

/// One square of the track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Position on the track, assigned on load from list order.
    #[serde(default, skip_serializing)]
    pub index: usize,

    /// Display name and ownership key.
    #[serde(rename = "square", alias = "name")]
    pub name: String,

    /// Colour group, targeted by "goto-and-get" chance cards.
    #[serde(default, alias = "color", skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,

    /// Purchase price; also the rent paid by other players.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}

impl Square {
    /// Create an unpriced square.
    #[must_use]
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            colour: None,
            cost: None,
        }
    }

    /// Create a property square.
    #[must_use]
    pub fn property(index: usize, name: impl Into<String>, colour: impl Into<String>, cost: i64) -> Self {
        Self {
            index,
            name: name.into(),
            colour: Some(colour.into()),
            cost: Some(cost),
        }
    }

    /// Landing behaviour of this square.
    #[must_use]
    pub fn kind(&self) -> SquareKind {
        SquareKind::of(&self.name)
    }

    /// Price of the square, zero for unpriced squares.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.cost.unwrap_or(0)
    }

    /// Check colour group membership.
    #[must_use]
    pub fn has_colour(&self, colour: &str) -> bool {
        self.colour.as_deref() == Some(colour)
    }
}
