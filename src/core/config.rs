//! Game configuration.
//!
//! Everything about the rules that is a number rather than board data lives
//! here: starting balances, the Go salary, the jail fee and so on. Games are
//! configured at startup and the engine never hardcodes these values.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Presents each player starts with.
pub const STARTING_PRESENTS: i32 = 8;

/// Paid for passing or landing past Go.
pub const GO_SALARY: i64 = 2;

/// Paid to leave jail without a card.
pub const JAIL_FEE: i64 = 1;

/// Starting balance for a table of `player_count` players.
///
/// Returns `None` for unsupported player counts.
#[must_use]
pub fn starting_money(player_count: usize) -> Option<i64> {
    match player_count {
        2 => Some(18),
        3 | 4 => Some(14),
        _ => None,
    }
}

/// Complete rules configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-4).
    pub player_count: usize,

    /// Balance every player starts with.
    pub starting_money: i64,

    /// Presents every player starts with.
    pub starting_presents: i32,

    /// Salary for passing Go, also paid by the "goto" chance card.
    pub go_salary: i64,

    /// Fee for leaving jail without a card.
    pub jail_fee: i64,

    /// Credit "pay into party box" payments to the shared pool.
    ///
    /// Off by default: the house rules debit the player and the money
    /// simply leaves the game.
    pub party_box_collects_payments: bool,

    /// End the game after this many turns even if nobody is bankrupt.
    pub turn_limit: Option<u32>,
}

impl GameConfig {
    /// Create the standard configuration for `player_count` players.
    pub fn new(player_count: usize) -> Result<Self, ConfigError> {
        let starting_money =
            starting_money(player_count).ok_or(ConfigError::InvalidPlayerCount(player_count))?;

        Ok(Self {
            player_count,
            starting_money,
            starting_presents: STARTING_PRESENTS,
            go_salary: GO_SALARY,
            jail_fee: JAIL_FEE,
            party_box_collects_payments: false,
            turn_limit: None,
        })
    }

    /// Override the starting balance.
    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    /// Override the Go salary.
    #[must_use]
    pub fn with_go_salary(mut self, salary: i64) -> Self {
        self.go_salary = salary;
        self
    }

    /// Override the jail fee.
    #[must_use]
    pub fn with_jail_fee(mut self, fee: i64) -> Self {
        self.jail_fee = fee;
        self
    }

    /// Credit "pay into party box" cards to the shared pool.
    #[must_use]
    pub fn with_party_box_collecting(mut self, enabled: bool) -> Self {
        self.party_box_collects_payments = enabled;
        self
    }

    /// Stop games after `turns` turns.
    #[must_use]
    pub fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = Some(turns);
        self
    }
}
