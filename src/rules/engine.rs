//! Turn resolution.
//!
//! A `Game` owns all mutable state of one playthrough: the players, the
//! party box pool and the chance deck. Board data is shared through an
//! `Arc` and never mutated.
//!
//! Every payment goes through [`Player::add_money`], which returns
//! `Err(Bankruptcy)` as soon as a balance stops being positive. The rule
//! methods propagate that with `?`, so a bankruptcy deep inside a chance
//! card ends the turn immediately and [`Game::play`] ends the game.

use std::sync::Arc;

use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use super::deck::ChanceDeck;
use super::die::{self, DieFace};
use super::event::{EventKind, TurnEvent};
use crate::board::{ChanceCard, GameData, Square, SquareKind};
use crate::core::{
    Bankruptcy, ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap, MAX_PLAYERS,
    MIN_PLAYERS,
};

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameEnd {
    /// A player's balance dropped to zero or below.
    Bankruptcy(PlayerId),
    /// The configured turn limit was reached first.
    TurnLimit,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// Every player tied for the best total, in seat order.
    pub winners: SmallVec<[PlayerId; MAX_PLAYERS]>,

    /// Names of `winners`.
    pub winner_names: Vec<String>,

    /// Winning `total_money`.
    pub top_score: i64,

    /// Turns taken, including the one that ended the game.
    pub turn_count: u32,

    pub end: GameEnd,
}

impl GameResult {
    /// Check if a player won (possibly shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }

    /// More than one player shares the top score.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// One simulated playthrough.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use party_monopoly::board::GameData;
/// use party_monopoly::core::{GameConfig, GameRng};
/// use party_monopoly::rules::Game;
///
/// let data = Arc::new(GameData::standard().unwrap());
/// let config = GameConfig::new(2).unwrap();
/// let mut game = Game::setup(data, config, &["Son", "Dad"], GameRng::new(12345)).unwrap();
///
/// let result = game.play();
/// assert!(result.turn_count >= 1);
/// assert!(!result.winner_names.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    data: Arc<GameData>,
    config: GameConfig,
    players: PlayerMap<Player>,
    party_box_balance: i64,
    deck: ChanceDeck,
    rng: GameRng,
    turn_count: u32,
    events: Option<Vec<TurnEvent>>,
}

impl Game {
    /// Create a game from existing players and an already shuffled deck.
    ///
    /// Players take turns in the order given; player `i` must have
    /// `PlayerId(i)` and there must be exactly `config.player_count` of them.
    pub fn new(
        data: Arc<GameData>,
        config: GameConfig,
        players: Vec<Player>,
        deck: ChanceDeck,
        rng: GameRng,
    ) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(ConfigError::InvalidPlayerCount(players.len()));
        }
        if players.len() != config.player_count {
            return Err(ConfigError::InvalidPlayerCount(players.len()));
        }
        if let Some((seat, player)) = players
            .iter()
            .enumerate()
            .find(|(seat, p)| p.id.index() != *seat)
        {
            return Err(ConfigError::SeatMismatch {
                seat,
                player: player.id,
            });
        }

        Ok(Self {
            data,
            config,
            players: PlayerMap::from_vec(players),
            party_box_balance: 0,
            deck,
            rng,
            turn_count: 0,
            events: None,
        })
    }

    /// Create a fresh game: players with the configured starting balance,
    /// and a deck shuffled from `rng` before any die is rolled.
    pub fn setup<S: AsRef<str>>(
        data: Arc<GameData>,
        config: GameConfig,
        names: &[S],
        mut rng: GameRng,
    ) -> Result<Self, ConfigError> {
        if names.len() != config.player_count {
            return Err(ConfigError::InvalidPlayerCount(names.len()));
        }

        let deck = ChanceDeck::shuffled(&data.chance_cards, &mut rng)?;
        let players = PlayerId::all(names.len())
            .zip(names)
            .map(|(id, name)| {
                Player::new(id, name.as_ref(), config.starting_money, config.starting_presents)
            })
            .collect();

        Self::new(data, config, players, deck, rng)
    }

    /// Keep a [`TurnEvent`] log for this game.
    #[must_use]
    pub fn with_event_log(mut self) -> Self {
        self.events = Some(Vec::new());
        self
    }

    // === Accessors ===

    /// Shared board and card data.
    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Mutable access to a player, for setting up positions in tests and
    /// scenarios.
    pub fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    pub fn party_box_balance(&self) -> i64 {
        self.party_box_balance
    }

    /// Add `amount` to the shared party box pool.
    pub fn fund_party_box(&mut self, amount: i64) {
        self.party_box_balance += amount;
    }

    pub fn deck(&self) -> &ChanceDeck {
        &self.deck
    }

    /// Turns taken so far by [`Game::play`].
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Recorded events, if the log is enabled.
    pub fn events(&self) -> Option<&[TurnEvent]> {
        self.events.as_deref()
    }

    /// The player owning the named square, if any.
    #[must_use]
    pub fn owner_of(&self, square: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.owns(square))
            .map(|(id, _)| id)
    }

    // === Rules ===

    /// Play round-robin turns until a player goes bankrupt.
    ///
    /// The bankrupt player stays at the table and is ranked with everyone
    /// else. Call once per game.
    pub fn play(&mut self) -> GameResult {
        let player_count = self.players.player_count();

        loop {
            let player = PlayerId::new((self.turn_count as usize % player_count) as u8);
            self.turn_count += 1;

            if let Err(bankruptcy) = self.take_turn(player) {
                self.record(
                    bankruptcy.player,
                    EventKind::Bankrupt {
                        balance: bankruptcy.balance,
                    },
                );
                return self.finish(GameEnd::Bankruptcy(bankruptcy.player));
            }

            if self.config.turn_limit.is_some_and(|limit| self.turn_count >= limit) {
                debug!(turns = self.turn_count, "turn limit reached");
                return self.finish(GameEnd::TurnLimit);
            }
        }
    }

    /// Roll the die and resolve one turn for `player`.
    pub fn take_turn(&mut self, player: PlayerId) -> Result<(), Bankruptcy> {
        let face = die::roll(&mut self.rng);
        self.record(player, EventKind::Rolled { face });

        match face {
            DieFace::Chance => self.chance(player),
            DieFace::Number(pips) => self.move_die_number(player, pips),
        }
    }

    /// Move `player` forward `die_number` squares and resolve the landing.
    pub fn move_die_number(&mut self, player: PlayerId, die_number: u8) -> Result<(), Bankruptcy> {
        let data = Arc::clone(&self.data);
        let track_length = data.board.len();

        if let Some(release) = self.players[player].leave_jail(self.config.jail_fee)? {
            self.record(player, EventKind::LeftJail { release });
        }

        let new_index = self.players[player].current_square + die_number as usize;
        if new_index >= track_length {
            let salary = self.config.go_salary;
            self.record(player, EventKind::PassedGo { salary });
            self.players[player].add_money(salary)?;
        }

        let square = data.board.get(new_index % track_length);
        self.players[player].current_square = square.index;
        self.record(
            player,
            EventKind::Moved {
                square: square.index,
                name: square.name.clone(),
            },
        );

        match square.kind() {
            SquareKind::Go | SquareKind::FreeParking | SquareKind::Jail => Ok(()),
            _ if self.players[player].owns(&square.name) => Ok(()),
            SquareKind::GoToJail => {
                let jail = data.board.jail_index().unwrap_or(square.index);
                let p = &mut self.players[player];
                p.in_jail = true;
                p.current_square = jail;
                self.record(player, EventKind::SentToJail { square: jail });
                Ok(())
            }
            SquareKind::Chance => self.chance(player),
            SquareKind::PartyBox => {
                let amount = self.party_box_balance;
                self.record(player, EventKind::CollectedPartyBox { amount });
                self.players[player].add_money(amount)?;
                self.party_box_balance = 0;
                Ok(())
            }
            SquareKind::Property => match self.owner_of(&square.name) {
                None => self.buy(player, &square.name, square.price()),
                Some(owner) => self.pay_rent(player, owner, &square.name, square.price()),
            },
        }
    }

    /// Draw the top chance card and apply it to `player`.
    pub fn chance(&mut self, player: PlayerId) -> Result<(), Bankruptcy> {
        let card = self.deck.draw();
        self.record(player, EventKind::DrewCard { card: card.clone() });

        match card {
            ChanceCard::GotoAndGet { colour } => self.goto_and_get(player, &colour),
            ChanceCard::Goto => {
                let amount = self.config.go_salary;
                self.players[player].current_square = 0;
                self.record(
                    player,
                    EventKind::Moved {
                        square: 0,
                        name: self.data.board.get(0).name.clone(),
                    },
                );
                self.record(player, EventKind::CollectedSalary { amount });
                self.players[player].add_money(amount)
            }
            ChanceCard::PayIntoPartyBox { amount } => {
                self.record(player, EventKind::PaidIntoPartyBox { amount });
                self.players[player].add_money(-amount)?;
                if self.config.party_box_collects_payments {
                    self.party_box_balance += amount;
                }
                Ok(())
            }
            ChanceCard::GetOutOfJailFree => {
                self.players[player].has_get_out_of_jail_card = true;
                self.record(player, EventKind::GotJailCard);
                Ok(())
            }
        }
    }

    /// Winners by `total_money`, ties included, in seat order.
    #[must_use]
    pub fn winners(&self) -> SmallVec<[PlayerId; MAX_PLAYERS]> {
        let top = self.top_score();
        self.players
            .iter()
            .filter(|(_, p)| p.total_money() == top)
            .map(|(id, _)| id)
            .collect()
    }

    /// Names of [`Game::winners`].
    #[must_use]
    pub fn winner_names(&self) -> Vec<String> {
        self.winners()
            .into_iter()
            .map(|id| self.players[id].name.clone())
            .collect()
    }

    fn top_score(&self) -> i64 {
        self.players
            .values()
            .map(Player::total_money)
            .max()
            .unwrap_or_default()
    }

    /// Go to a square of `colour`: take the first unowned one for free,
    /// else stand on your own first one, else pay the owner of the first.
    fn goto_and_get(&mut self, player: PlayerId, colour: &str) -> Result<(), Bankruptcy> {
        let data = Arc::clone(&self.data);
        let colour_squares: SmallVec<[&Square; 4]> = data.board.colour_squares(colour).collect();

        let unowned = colour_squares
            .iter()
            .find(|sq| self.owner_of(&sq.name).is_none());
        let self_owned = colour_squares
            .iter()
            .find(|sq| self.players[player].owns(&sq.name));

        let (target, owner) = match (unowned, self_owned, colour_squares.first()) {
            (Some(square), _, _) => (*square, None),
            (None, Some(square), _) => (*square, None),
            (None, None, Some(square)) => (*square, self.owner_of(&square.name)),
            (None, None, None) => return Ok(()),
        };

        self.players[player].current_square = target.index;
        self.record(
            player,
            EventKind::Moved {
                square: target.index,
                name: target.name.clone(),
            },
        );

        if unowned.is_some() {
            return self.buy(player, &target.name, 0);
        }
        match owner {
            Some(owner) => self.pay_rent(player, owner, &target.name, target.price()),
            None => Ok(()),
        }
    }

    fn buy(&mut self, player: PlayerId, square: &str, cost: i64) -> Result<(), Bankruptcy> {
        self.record(
            player,
            EventKind::Bought {
                square: square.to_owned(),
                cost,
            },
        );
        self.players[player].buy_square(square, cost)
    }

    /// Debit `payer` first; the owner is only credited if the payer survives.
    fn pay_rent(
        &mut self,
        payer: PlayerId,
        owner: PlayerId,
        square: &str,
        amount: i64,
    ) -> Result<(), Bankruptcy> {
        self.record(
            payer,
            EventKind::PaidRent {
                square: square.to_owned(),
                owner,
                amount,
            },
        );
        self.players[payer].add_money(-amount)?;
        self.players[owner].add_money(amount)
    }

    fn finish(&self, end: GameEnd) -> GameResult {
        let winners = self.winners();
        let winner_names = self.winner_names();
        let top_score = self.top_score();
        debug!(
            turns = self.turn_count,
            "player(s) {} won the game with {}",
            winner_names.join(", "),
            top_score
        );

        GameResult {
            winners,
            winner_names,
            top_score,
            turn_count: self.turn_count,
            end,
        }
    }

    fn record(&mut self, player: PlayerId, kind: EventKind) {
        debug!(turn = self.turn_count, player = %self.players[player].name, "{kind}");
        if let Some(events) = &mut self.events {
            events.push(TurnEvent {
                turn: self.turn_count,
                player,
                kind,
            });
        }
    }
}
