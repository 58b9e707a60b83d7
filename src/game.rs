use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    bitboard::BitBoard,
    board::{create_board, Board, Cell},
    common::{ConfigError, Coordinate, GameError, GuessOutcome, GuessResult},
    config::GameConfig,
    ship::{is_adjacent_to_ship, place_ships, ShipSet},
};

/// Coordinates one side has already fired at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessLog {
    fired: BitBoard<u128>,
}

impl GuessLog {
    /// An empty log for a `size×size` board.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            fired: BitBoard::try_new(size)?,
        })
    }

    /// A log pre-filled with earlier shots. Repeats collapse.
    pub fn from_coords<I>(size: usize, coords: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let fired = BitBoard::from_iter(size, coords.into_iter().map(|c| (c.row, c.col)))?;
        Ok(Self { fired })
    }

    pub fn size(&self) -> usize {
        self.fired.size()
    }

    /// Number of shots fired.
    pub fn len(&self) -> usize {
        self.fired.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.fired.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Number of cells not fired at yet.
    pub fn remaining(&self) -> usize {
        self.fired.cells() - self.len()
    }

    /// `true` once every cell of the board has been fired at.
    pub fn is_exhausted(&self) -> bool {
        self.fired.is_full()
    }

    /// Fail unless `coord` is on the board and has not been fired at.
    pub fn check_open(&self, coord: Coordinate) -> Result<(), GameError> {
        if self.fired.get(coord.row, coord.col)? {
            return Err(GameError::DuplicateGuess(coord));
        }
        Ok(())
    }

    fn record(&mut self, coord: Coordinate) -> Result<(), GameError> {
        self.check_open(coord)?;
        self.fired.set(coord.row, coord.col)?;
        Ok(())
    }

    /// Coordinates not fired at yet, in row-major order.
    pub fn open_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        (!self.fired).iter_set_bits().map(Coordinate::from)
    }

    /// Uniformly pick a coordinate not fired at yet, or `None` if the board
    /// is exhausted.
    pub fn pick_open<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        let k = rng.random_range(0..remaining);
        self.open_coordinates().nth(k)
    }
}

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    InProgress,
    PlayerWins,
    ComputerWins,
}

impl Outcome {
    /// `true` for either win; no further shots are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Text shown to the player for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::InProgress => "",
            Outcome::PlayerWins => "You win! All enemy ships are destroyed!",
            Outcome::ComputerWins => "Game over! The computer sank all your ships!",
        }
    }
}

/// One full exchange: the player's shot and, unless it ended the game, the
/// computer's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    pub player: GuessOutcome,
    pub computer: Option<GuessOutcome>,
    pub outcome: Outcome,
}

/// Complete state of one session. Replaced wholesale for a new game.
///
/// Decoding runs [`GameState::validate`], so a state read back from storage
/// obeys the same rules as one built by [`new_game`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGameState")
)]
pub struct GameState {
    player_board: Board,
    computer_board: Board,
    player_ships: ShipSet,
    computer_ships: ShipSet,
    player_guesses: GuessLog,
    computer_guesses: GuessLog,
    outcome: Outcome,
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawGameState {
    player_board: Board,
    computer_board: Board,
    player_ships: ShipSet,
    computer_ships: ShipSet,
    player_guesses: GuessLog,
    computer_guesses: GuessLog,
    outcome: Outcome,
}

#[cfg(feature = "std")]
impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            player_board: raw.player_board,
            computer_board: raw.computer_board,
            player_ships: raw.player_ships,
            computer_ships: raw.computer_ships,
            player_guesses: raw.player_guesses,
            computer_guesses: raw.computer_guesses,
            outcome: raw.outcome,
        };
        state.validate()?;
        Ok(state)
    }
}

impl GameState {
    /// Check the rules tying the boards, fleets, logs and outcome together.
    pub fn validate(&self) -> Result<(), GameError> {
        let size = self.board_size();
        if size == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        let sizes = [
            self.computer_board.size(),
            self.player_ships.size(),
            self.computer_ships.size(),
            self.player_guesses.size(),
            self.computer_guesses.size(),
        ];
        if let Some(&found) = sizes.iter().find(|&&s| s != size) {
            return Err(ConfigError::SizeMismatch {
                expected: size,
                found,
            }
            .into());
        }
        check_side(&self.player_board, &self.player_ships, &self.computer_guesses)?;
        check_side(&self.computer_board, &self.computer_ships, &self.player_guesses)?;
        if self.outcome != check_winner(&self.player_ships, &self.computer_ships) {
            return Err(ConfigError::InconsistentState(
                "outcome does not follow from the fleets",
            ).into());
        }
        Ok(())
    }

    pub fn board_size(&self) -> usize {
        self.player_board.size()
    }

    /// The player's own waters as the computer's shots marked them.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's waters as the player's shots marked them.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn player_ships(&self) -> &ShipSet {
        &self.player_ships
    }

    /// The computer's intact fleet. Callers must not reveal it to the player.
    pub fn computer_ships(&self) -> &ShipSet {
        &self.computer_ships
    }

    /// Shots the player has fired.
    pub fn player_guesses(&self) -> &GuessLog {
        &self.player_guesses
    }

    /// Shots the computer has fired.
    pub fn computer_guesses(&self) -> &GuessLog {
        &self.computer_guesses
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn message(&self) -> &'static str {
        self.outcome.message()
    }

    /// What the human side is allowed to see.
    pub fn player_view(&self) -> PlayerView<'_> {
        PlayerView {
            own_board: &self.player_board,
            own_ships: &self.player_ships,
            target_board: &self.computer_board,
            fired: &self.player_guesses,
            outcome: self.outcome,
        }
    }
}

/// The player's side of a [`GameState`], with the computer's fleet left out.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    pub own_board: &'a Board,
    pub own_ships: &'a ShipSet,
    pub target_board: &'a Board,
    pub fired: &'a GuessLog,
    pub outcome: Outcome,
}

/// One side's waters: no intact ship under a shot, and exactly the fired-at
/// cells are marked.
fn check_side(board: &Board, ships: &ShipSet, shots: &GuessLog) -> Result<(), GameError> {
    if !(ships.bits() & shots.fired).is_empty() {
        return Err(ConfigError::InconsistentState(
            "an intact ship sits on a cell already fired at",
        ).into());
    }
    for (r, row) in board.rows().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if (cell == Cell::Water) == shots.contains(Coordinate::new(r, c)) {
                return Err(ConfigError::InconsistentState(
                    "board marks do not match the shots fired",
                ).into());
            }
        }
    }
    Ok(())
}

/// Set up a fresh session: two empty boards, two random fleets, no shots.
pub fn new_game<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<GameState, GameError> {
    config.validate()?;
    let size = config.board_size;
    let computer_ships = place_ships(size, config.ship_count, rng)?;
    let player_ships = place_ships(size, config.ship_count, rng)?;
    Ok(GameState {
        player_board: create_board(size),
        computer_board: create_board(size),
        player_ships,
        computer_ships,
        player_guesses: GuessLog::new(size)?,
        computer_guesses: GuessLog::new(size)?,
        outcome: Outcome::InProgress,
    })
}

/// Fire at `coord` on the target side. On error nothing is modified.
pub fn resolve_guess(
    coord: Coordinate,
    target_ships: &mut ShipSet,
    target_board: &mut Board,
    guess_log: &mut GuessLog,
) -> Result<GuessOutcome, GameError> {
    let size = target_board.size();
    if !coord.in_bounds(size) || !coord.in_bounds(target_ships.size()) {
        return Err(GameError::OutOfBounds { coord, size });
    }
    guess_log.record(coord)?;

    let result = if target_ships.remove(coord) {
        GuessResult::Sunk
    } else if is_adjacent_to_ship(coord, target_ships) {
        GuessResult::Near
    } else {
        GuessResult::Miss
    };
    target_board.mark(coord, Cell::from(result))?;

    let outcome = GuessOutcome {
        coord,
        result,
        defeated: target_ships.is_empty(),
    };
    debug!(
        "guess at {} -> {:?} ({} ships left)",
        coord,
        result,
        target_ships.len()
    );
    Ok(outcome)
}

/// The computer's shot: a uniformly random coordinate it has not fired at.
pub fn computer_turn<R: Rng + ?Sized>(
    target_ships: &mut ShipSet,
    target_board: &mut Board,
    guess_log: &mut GuessLog,
    rng: &mut R,
) -> Result<GuessOutcome, GameError> {
    let coord = guess_log.pick_open(rng).ok_or(GameError::BoardExhausted)?;
    resolve_guess(coord, target_ships, target_board, guess_log)
}

/// Decide the game from the two fleets. The player is checked first, so a
/// double wipe-out counts as a player win.
pub fn check_winner(player_ships: &ShipSet, computer_ships: &ShipSet) -> Outcome {
    if computer_ships.is_empty() {
        Outcome::PlayerWins
    } else if player_ships.is_empty() {
        Outcome::ComputerWins
    } else {
        Outcome::InProgress
    }
}

/// Play one round: the player's shot at `coord`, then the computer's reply
/// unless the player just won. Either the whole round applies or nothing does.
pub fn play_round<R: Rng + ?Sized>(
    state: &mut GameState,
    coord: Coordinate,
    rng: &mut R,
) -> Result<Round, GameError> {
    if state.outcome.is_over() {
        return Err(GameError::GameOver(state.outcome));
    }
    if !coord.in_bounds(state.computer_board.size()) {
        return Err(GameError::OutOfBounds {
            coord,
            size: state.computer_board.size(),
        });
    }
    state.player_guesses.check_open(coord)?;
    let finishing_shot = state.computer_ships.len() == 1 && state.computer_ships.contains(coord);
    if !finishing_shot && state.computer_guesses.is_exhausted() {
        return Err(GameError::BoardExhausted);
    }

    let player = resolve_guess(
        coord,
        &mut state.computer_ships,
        &mut state.computer_board,
        &mut state.player_guesses,
    )?;
    let computer = if player.defeated {
        None
    } else {
        Some(computer_turn(
            &mut state.player_ships,
            &mut state.player_board,
            &mut state.computer_guesses,
            rng,
        )?)
    };

    state.outcome = check_winner(&state.player_ships, &state.computer_ships);
    if state.outcome.is_over() {
        info!(
            "game over: {:?} after {} player shots",
            state.outcome,
            state.player_guesses.len()
        );
    }
    Ok(Round {
        player,
        computer,
        outcome: state.outcome,
    })
}

/// Fire at the computer and report the player's shot plus the resulting outcome.
pub fn fire_at_computer<R: Rng + ?Sized>(
    state: &mut GameState,
    coord: Coordinate,
    rng: &mut R,
) -> Result<(GuessOutcome, Outcome), GameError> {
    let round = play_round(state, coord, rng)?;
    Ok((round.player, round.outcome))
}

fn seeded_rng(seed: Option<u64>) -> Result<SmallRng, GameError> {
    match seed {
        Some(s) => Ok(SmallRng::seed_from_u64(s)),
        #[cfg(feature = "std")]
        None => Ok(SmallRng::from_rng(&mut rand::rng())),
        #[cfg(not(feature = "std"))]
        None => Err(ConfigError::MissingSeed.into()),
    }
}

/// A game session: its settings, current state and its own random source.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: SmallRng,
}

impl GameEngine {
    /// Start a session, seeding the RNG from `config.seed` when present and
    /// from the thread RNG otherwise. Without the `std` feature there is no
    /// entropy source, so a missing seed fails with
    /// [`ConfigError::MissingSeed`].
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = seeded_rng(config.seed)?;
        Self::with_rng(config, rng)
    }

    /// Start a session driven by the given RNG.
    pub fn with_rng(config: GameConfig, mut rng: SmallRng) -> Result<Self, GameError> {
        let state = new_game(&config, &mut rng)?;
        info!(
            "new game: {}x{} board, {} ships each",
            config.board_size, config.board_size, config.ship_count
        );
        Ok(Self { config, state, rng })
    }

    /// Resume a session from a previously captured state. The state must be
    /// valid and sized for `config`.
    pub fn from_state(
        config: GameConfig,
        state: GameState,
        rng: SmallRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if state.board_size() != config.board_size {
            return Err(ConfigError::SizeMismatch {
                expected: config.board_size,
                found: state.board_size(),
            }
            .into());
        }
        state.validate()?;
        let dealt = config.ship_count;
        if state.player_ships.len() > dealt || state.computer_ships.len() > dealt {
            return Err(ConfigError::InconsistentState(
                "more intact ships than the configuration deals",
            ).into());
        }
        Ok(Self { config, state, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Fire at the computer's board and let the computer answer.
    pub fn fire(&mut self, coord: Coordinate) -> Result<Round, GameError> {
        play_round(&mut self.state, coord, &mut self.rng)
    }

    /// Throw the current state away and deal a new game with the same settings.
    pub fn play_again(&mut self) -> Result<(), GameError> {
        self.state = new_game(&self.config, &mut self.rng)?;
        info!("starting a new game");
        Ok(())
    }

    /// The player's view together with the session RNG, for choosing a target.
    pub fn view_and_rng(&mut self) -> (PlayerView<'_>, &mut SmallRng) {
        (self.state.player_view(), &mut self.rng)
    }
}
