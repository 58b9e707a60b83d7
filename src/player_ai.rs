use rand::rngs::SmallRng;

use crate::{
    common::{Coordinate, GuessOutcome, GuessResult},
    game::PlayerView,
};

use crate::player::Player;

/// Plays the human side by firing at a uniformly random untried cell, the
/// same way the computer plays.
#[derive(Debug, Default)]
pub struct AiPlayer {
    shots: usize,
    sunk: usize,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shots accepted by the engine so far.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Enemy ships this player has sunk.
    pub fn sunk(&self) -> usize {
        self.sunk
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, view: &PlayerView<'_>) -> Option<Coordinate> {
        view.fired.pick_open(rng)
    }

    fn handle_guess_result(&mut self, outcome: &GuessOutcome) {
        self.shots += 1;
        if outcome.result == GuessResult::Sunk {
            self.sunk += 1;
        }
    }
}
