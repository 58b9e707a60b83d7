//! Common types for Skirmish: coordinates, guess results and errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A cell position on a square board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on a `size×size` board.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The up to eight cells at Chebyshev distance exactly 1. Neighbours that
    /// would fall below zero are skipped; upper bounds are the caller's concern.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            Some(Coordinate { row, col })
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Guess matched a ship, which is now sunk.
    Sunk,
    /// Guess missed but touches an intact ship.
    Near,
    /// Guess missed all ships and their neighbours.
    Miss,
}

/// A resolved guess: where it landed, what it did and whether it finished
/// off the target side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessOutcome {
    pub coord: Coordinate,
    pub result: GuessResult,
    /// `true` when the target side has no ships left after this guess.
    pub defeated: bool,
}

/// Reasons a game cannot be set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// More ships requested than the board has cells.
    TooManyShips { ships: usize, cells: usize },
    /// Board side exceeds what the coordinate sets can hold.
    BoardTooLarge { size: usize, max: usize },
    /// A zero-sized board.
    EmptyBoard,
    /// A game without ships.
    NoShips,
    /// A restored state does not match the board size it is resumed with.
    SizeMismatch { expected: usize, found: usize },
    /// A restored state breaks one of the game's rules.
    InconsistentState(&'static str),
    /// No seed was given and the build has no entropy source.
    MissingSeed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManyShips { ships, cells } => {
                write!(f, "cannot place {} ships on a board of {} cells", ships, cells)
            }
            ConfigError::BoardTooLarge { size, max } => {
                write!(f, "board size {} exceeds the maximum of {}", size, max)
            }
            ConfigError::EmptyBoard => write!(f, "board size must be at least 1"),
            ConfigError::NoShips => write!(f, "at least one ship is required"),
            ConfigError::SizeMismatch { expected, found } => {
                write!(f, "expected a board of size {}, found {}", expected, found)
            }
            ConfigError::InconsistentState(why) => write!(f, "inconsistent game state: {}", why),
            ConfigError::MissingSeed => write!(f, "a seed is required without the std feature"),
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Session could not be configured; nothing was created.
    Configuration(ConfigError),
    /// This coordinate was already fired upon.
    DuplicateGuess(Coordinate),
    /// Coordinate lies outside the board.
    OutOfBounds { coord: Coordinate, size: usize },
    /// No unguessed coordinate remains on the target board.
    BoardExhausted,
    /// The session already reached a final outcome.
    GameOver(crate::game::Outcome),
}

impl GameError {
    /// Errors the caller can recover from by asking for another coordinate.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::DuplicateGuess(_) | GameError::OutOfBounds { .. }
        )
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Configuration(err)
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::SizeTooLarge { n, capacity } => {
                GameError::Configuration(ConfigError::BoardTooLarge {
                    size: n,
                    max: crate::bitboard::side_for_capacity(capacity),
                })
            }
            BitBoardError::IndexOutOfBounds { row, col, size } => GameError::OutOfBounds {
                coord: Coordinate::new(row, col),
                size,
            },
            BitBoardError::StrayBits { .. } => GameError::Configuration(
                ConfigError::InconsistentState("coordinate set has bits outside the board"),
            ),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Configuration(e) => write!(f, "Configuration error: {}", e),
            GameError::DuplicateGuess(c) => write!(f, "Already fired at {}", c),
            GameError::OutOfBounds { coord, size } => write!(
                f,
                "Coordinate {} is outside the {}x{} board",
                coord, size, size
            ),
            GameError::BoardExhausted => write!(f, "No unguessed coordinates remain"),
            GameError::GameOver(outcome) => write!(f, "Game is over: {:?}", outcome),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Configuration(e) => Some(e),
            _ => None,
        }
    }
}
