use log::{debug, warn};
use rand::rngs::SmallRng;

use crate::{
    common::{Coordinate, GameError, GuessOutcome},
    game::{GameEngine, Outcome, PlayerView},
};

/// Interface implemented by whoever plays the human side.
pub trait Player {
    /// Choose the next coordinate to fire at, or `None` to stop playing.
    fn select_target(&mut self, rng: &mut SmallRng, view: &PlayerView<'_>) -> Option<Coordinate>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _outcome: &GuessOutcome) {}

    /// Inform the player of the computer's reply shot.
    fn handle_opponent_guess(&mut self, _outcome: &GuessOutcome) {}

    /// Inform the player that a target was refused and nothing changed.
    fn handle_rejected_guess(&mut self, _err: &GameError) {}
}

/// Drive rounds until the game ends or the player stops choosing targets.
/// Recoverable errors are reported to the player, who is asked again.
pub fn play_out<P: Player + ?Sized>(
    engine: &mut GameEngine,
    player: &mut P,
) -> Result<Outcome, GameError> {
    while !engine.outcome().is_over() {
        let target = {
            let (view, rng) = engine.view_and_rng();
            player.select_target(rng, &view)
        };
        let Some(coord) = target else {
            debug!("player stopped before the game ended");
            break;
        };
        match engine.fire(coord) {
            Ok(round) => {
                player.handle_guess_result(&round.player);
                if let Some(reply) = round.computer {
                    player.handle_opponent_guess(&reply);
                }
            }
            Err(e) if e.is_recoverable() => {
                warn!("rejected guess: {}", e);
                player.handle_rejected_guess(&e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(engine.outcome())
}
