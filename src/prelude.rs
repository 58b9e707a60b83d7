//! Commonly used types and utilities for ease of import.

pub use crate::{
    play_out, AiPlayer, Coordinate, GameConfig, GameEngine, GameError, GuessOutcome, GuessResult,
    Outcome, Player,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_player_view, CliPlayer};
