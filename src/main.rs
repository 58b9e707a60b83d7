#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use skirmish::{
    init_logging, play_out, print_player_view, AiPlayer, CliPlayer, GameConfig, GameEngine,
    Outcome, DEFAULT_BOARD_SIZE, NUM_SHIPS,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board side length")]
    size: usize,
    #[arg(long, default_value_t = NUM_SHIPS, help = "Ships per side")]
    ships: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl From<GameArgs> for GameConfig {
    fn from(args: GameArgs) -> Self {
        GameConfig {
            board_size: args.size,
            ship_count: args.ships,
            seed: args.seed,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer from the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Let a random-guessing AI play your side and watch.
    Auto {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[cfg(feature = "std")]
fn announce(engine: &GameEngine) {
    std::println!("\n=== GAME OVER ===");
    print_player_view(&engine.state().player_view());
    std::println!("\n{}", engine.state().message());
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game } => {
            if let Some(s) = game.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut engine = GameEngine::new(game.into())?;
            let mut player = CliPlayer::new();
            println!("Battleship: Player vs. Computer");
            loop {
                let outcome = play_out(&mut engine, &mut player)?;
                if outcome == Outcome::InProgress {
                    println!("\nLeaving the game.");
                    break;
                }
                announce(&engine);
                if !player.ask_play_again() {
                    break;
                }
                engine.play_again()?;
            }
        }
        Commands::Auto { game } => {
            let mut engine = GameEngine::new(game.into())?;
            let mut ai = AiPlayer::new();
            play_out(&mut engine, &mut ai)?;
            announce(&engine);
            println!("AI fired {} shots and sank {} ships.", ai.shots(), ai.sunk());
        }
    }
    Ok(())
}
