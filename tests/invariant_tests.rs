//! Property tests for the rules invariants.
//!
//! Games are stepped turn by turn through `take_turn` so the state can be
//! inspected between turns.

use std::sync::Arc;

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use party_monopoly::board::{Board, ChanceCard, GameData, Square};
use party_monopoly::core::{Bankruptcy, GameConfig, GameRng, Player, PlayerId};
use party_monopoly::rules::{ChanceDeck, Game};

/// Play round-robin until a bankruptcy, calling `check` after every turn
/// that completed normally. Returns the bankruptcy and the turn count.
fn step_to_bankruptcy(game: &mut Game, mut check: impl FnMut(&Game)) -> (Bankruptcy, u32) {
    let player_count = game.players().player_count();
    let mut turn = 0u32;
    loop {
        let player = PlayerId::new((turn as usize % player_count) as u8);
        turn += 1;
        match game.take_turn(player) {
            Ok(()) => check(game),
            Err(bankruptcy) => return (bankruptcy, turn),
        }
    }
}

fn new_game(player_count: usize, seed: u64) -> Game {
    let data = Arc::new(GameData::standard().unwrap());
    let config = GameConfig::new(player_count).unwrap();
    let names = ["Son", "Dad", "Mum", "Gran"];
    Game::setup(data, config, &names[..player_count], GameRng::new(seed)).unwrap()
}

/// A 24-square track where only Go does anything.
fn quiet_track() -> Arc<GameData> {
    let squares = (0..24)
        .map(|i| Square::new(i, if i == 0 { "Go" } else { "Free Parking" }))
        .collect();
    Arc::new(GameData::new(Board::new(squares).unwrap(), vec![ChanceCard::Goto]).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Balances are positive after every turn that did not end the game.
    #[test]
    fn balances_stay_positive(seed in any::<u64>(), player_count in 2usize..=4) {
        let mut game = new_game(player_count, seed);
        let (bankruptcy, _) = step_to_bankruptcy(&mut game, |game| {
            for player in game.players().values() {
                assert!(player.money() > 0, "{} left at {}", player.name, player.money());
            }
        });

        prop_assert!(bankruptcy.balance <= 0);
        prop_assert_eq!(game.player(bankruptcy.player).money(), bankruptcy.balance);
    }

    /// No square is ever owned by two players.
    #[test]
    fn ownership_is_exclusive(seed in any::<u64>(), player_count in 2usize..=4) {
        let mut game = new_game(player_count, seed);
        let check = |game: &Game| {
            let mut seen = FxHashSet::default();
            for player in game.players().values() {
                for square in player.squares_owned() {
                    assert!(seen.insert(square.clone()), "{square} owned twice");
                }
            }
        };
        step_to_bankruptcy(&mut game, check);
        check(&game);
    }

    /// Drawing never changes the deck size.
    #[test]
    fn deck_length_is_constant(seed in any::<u64>()) {
        let mut game = new_game(2, seed);
        let size = game.deck().len();
        step_to_bankruptcy(&mut game, |game| assert_eq!(game.deck().len(), size));
        prop_assert_eq!(game.deck().len(), size);
    }

    /// The Go salary is paid exactly once when a move reaches or passes the
    /// end of the track, and never otherwise.
    #[test]
    fn go_salary_boundary(start in 0usize..24, die in 1u8..=6) {
        let players = vec![
            Player::new(PlayerId::new(0), "Son", 18, 8),
            Player::new(PlayerId::new(1), "Dad", 18, 8),
        ];
        let deck = ChanceDeck::new(vec![ChanceCard::Goto]).unwrap();
        let mut game = Game::new(
            quiet_track(),
            GameConfig::new(2).unwrap(),
            players,
            deck,
            GameRng::new(0),
        )
        .unwrap();
        let son = PlayerId::new(0);
        game.player_mut(son).current_square = start;

        game.move_die_number(son, die).unwrap();

        let expected = if start + die as usize >= 24 { 20 } else { 18 };
        prop_assert_eq!(game.player(son).money(), expected);
        prop_assert_eq!(game.player(son).current_square, (start + die as usize) % 24);
    }

    /// `play` agrees with stepping the same game by hand, and the winners
    /// are exactly the players holding the top total.
    #[test]
    fn play_matches_manual_stepping(seed in any::<u64>(), player_count in 2usize..=4) {
        let mut stepped = new_game(player_count, seed);
        let (bankruptcy, turns) = step_to_bankruptcy(&mut stepped, |_| {});

        let mut played = new_game(player_count, seed);
        let result = played.play();

        prop_assert_eq!(result.turn_count, turns);
        prop_assert!(result.winners.len() >= 1);

        let best = played.players().values().map(Player::total_money).max().unwrap();
        prop_assert_eq!(result.top_score, best);
        for (id, player) in played.players().iter() {
            prop_assert_eq!(result.is_winner(id), player.total_money() == best);
            prop_assert_eq!(player.money(), stepped.player(id).money());
        }
        prop_assert_eq!(
            result.end,
            party_monopoly::rules::GameEnd::Bankruptcy(bankruptcy.player)
        );
    }
}
