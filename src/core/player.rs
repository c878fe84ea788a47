//! Player identification and per-player account state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are 0-based and double as the turn order.
//!
//! ## Player
//!
//! Balance, owned squares, position and jail flags for one seat. Every balance
//! change goes through [`Player::add_money`], which reports bankruptcy the
//! moment the balance stops being positive.
//!
//! ## PlayerMap
//!
//! `Vec`-backed storage indexed by `PlayerId`.

use std::ops::{Index, IndexMut};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::Bankruptcy;

/// Player seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use party_monopoly::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// How a player got out of jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailRelease {
    /// Used a "get out of jail free" card.
    Card,
    /// Paid the jail fee.
    Paid(i64),
}

/// One player's account and board state.
#[derive(Clone, Debug)]
pub struct Player {
    /// Seat, unique within a game.
    pub id: PlayerId,

    /// Display name, unique within a game.
    pub name: String,

    money: i64,

    squares_owned: FxHashSet<String>,

    /// Index of the square the player stands on.
    pub current_square: usize,

    /// Decremented on every purchase. Never consulted by the rules.
    pub presents: i32,

    pub in_jail: bool,

    pub has_get_out_of_jail_card: bool,
}

impl Player {
    /// Create a player standing on square 0 with no property.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, money: i64, presents: i32) -> Self {
        Self {
            id,
            name: name.into(),
            money,
            squares_owned: FxHashSet::default(),
            current_square: 0,
            presents,
            in_jail: false,
            has_get_out_of_jail_card: false,
        }
    }

    /// Current balance.
    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    /// Names of the squares this player owns.
    #[must_use]
    pub fn squares_owned(&self) -> &FxHashSet<String> {
        &self.squares_owned
    }

    /// Check whether this player owns the named square.
    #[must_use]
    pub fn owns(&self, square: &str) -> bool {
        self.squares_owned.contains(square)
    }

    /// Score used to rank players at the end of a game.
    #[must_use]
    pub fn total_money(&self) -> i64 {
        self.money + self.squares_owned.len() as i64
    }

    /// Add `amount` (negative for payments) to the balance.
    ///
    /// The change is applied first; if the balance is then zero or below the
    /// player is bankrupt and the error is returned.
    pub fn add_money(&mut self, amount: i64) -> Result<(), Bankruptcy> {
        if amount <= 0 {
            debug!(player = %self.name, "subtracting {}", -amount);
        } else {
            debug!(player = %self.name, "adding {}", amount);
        }

        self.money += amount;

        if self.money <= 0 {
            return Err(Bankruptcy {
                player: self.id,
                balance: self.money,
            });
        }
        Ok(())
    }

    /// Pay `cost` and take ownership of `square`.
    ///
    /// If the payment bankrupts the player the square is not added.
    pub fn buy_square(&mut self, square: &str, cost: i64) -> Result<(), Bankruptcy> {
        self.add_money(-cost)?;
        self.squares_owned.insert(square.to_owned());
        self.presents -= 1;
        Ok(())
    }

    /// Leave jail at the start of a move.
    ///
    /// Returns `None` when the player was not in jail. A held card is used in
    /// preference to paying `fee`.
    pub fn leave_jail(&mut self, fee: i64) -> Result<Option<JailRelease>, Bankruptcy> {
        if !self.in_jail {
            return Ok(None);
        }

        if self.has_get_out_of_jail_card {
            self.has_get_out_of_jail_card = false;
            self.in_jail = false;
            return Ok(Some(JailRelease::Card));
        }

        self.add_money(-fee)?;
        self.in_jail = false;
        Ok(Some(JailRelease::Paid(fee)))
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat, in turn order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Wrap an existing vector; entry `i` belongs to `PlayerId(i)`.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
