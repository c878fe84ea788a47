//! Command line driver.
//!
//! A single iteration prints a turn-by-turn trace of one game. More
//! iterations log progress every thousand games and print the aggregate
//! report at the end.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use party_monopoly::{GameConfig, GameData, SimulationConfig, Simulator};

/// Simulate party Monopoly games and report win rates and game lengths.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of games to play.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    iterations: u64,

    /// Number of players (2 to 4).
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Comma-separated player names, one per player.
    #[arg(long, value_delimiter = ',')]
    names: Option<Vec<String>>,

    /// Square table (JSON). Defaults to the built-in board.
    #[arg(long)]
    squares: Option<PathBuf>,

    /// Chance card table (JSON). Defaults to the built-in deck.
    #[arg(long)]
    chance_cards: Option<PathBuf>,

    /// Credit "pay into party box" cards to the party box.
    #[arg(long)]
    fund_party_box: bool,

    /// Stop any game after this many turns.
    #[arg(long)]
    turn_limit: Option<u32>,

    /// Print the result as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.iterations);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(iterations: u64) {
    let default_level = if iterations > 1 { "info" } else { "debug" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let data = Arc::new(GameData::load(
        cli.squares.as_deref(),
        cli.chance_cards.as_deref(),
    )?);

    let mut game = GameConfig::new(cli.players)?.with_party_box_collecting(cli.fund_party_box);
    if let Some(limit) = cli.turn_limit {
        game = game.with_turn_limit(limit);
    }

    let mut config = SimulationConfig::new(cli.players)?
        .with_iterations(cli.iterations)
        .with_game(game);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(names) = &cli.names {
        config = config.with_player_names(names.iter().cloned());
    }

    let simulator = Simulator::new(data, config)?;

    if cli.iterations <= 1 {
        let (game, result) = simulator.play_single()?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&(game.events(), &result))?);
        } else {
            for player in game.players().values() {
                info!(
                    player = %player.name,
                    money = player.money(),
                    squares = player.squares_owned().len(),
                    total = player.total_money(),
                    "final standing"
                );
            }
            println!(
                "Player(s) {} won the game with {} after {} turns",
                result.winner_names.join(", "),
                result.top_score,
                result.turn_count
            );
        }
        return Ok(());
    }

    let report = simulator.run()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
