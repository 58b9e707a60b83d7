#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use skirmish::{init_logging, play_out, AiPlayer, GameConfig, GameEngine, Outcome};

/// Play AI-vs-computer games and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u64,
    #[arg(long, default_value_t = skirmish::DEFAULT_BOARD_SIZE)]
    size: usize,
    #[arg(long, default_value_t = skirmish::NUM_SHIPS)]
    ships: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut player_wins = 0u64;
    let mut computer_wins = 0u64;
    let mut games = Vec::new();
    for i in 0..args.games {
        let config = GameConfig::default()
            .with_board_size(args.size)
            .with_ship_count(args.ships)
            .with_seed(args.seed.wrapping_add(i));
        let mut engine = GameEngine::new(config)?;
        let mut ai = AiPlayer::new();
        let outcome = play_out(&mut engine, &mut ai)?;
        let winner = match outcome {
            Outcome::PlayerWins => {
                player_wins += 1;
                Some("player")
            }
            Outcome::ComputerWins => {
                computer_wins += 1;
                Some("computer")
            }
            Outcome::InProgress => None,
        };
        let state = engine.state();
        games.push(json!({
            "seed": config.seed,
            "outcome": outcome,
            "winner": winner,
            "player_shots": state.player_guesses().len(),
            "computer_shots": state.computer_guesses().len(),
            "player_ships_left": state.player_ships().len(),
        }));
    }

    let result = json!({
        "games": games,
        "player_wins": player_wins,
        "computer_wins": computer_wins,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
