//! Target board: what each side has learned about the other's waters.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{ConfigError, Coordinate, GameError, GuessResult};

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Not fired upon yet.
    #[default]
    Water,
    /// A ship was sunk here.
    Hit,
    /// Missed, but a ship was adjacent when the shot landed.
    HurtMarker,
    /// Missed with no ship adjacent.
    Miss,
}

impl From<GuessResult> for Cell {
    fn from(result: GuessResult) -> Self {
        match result {
            GuessResult::Sunk => Cell::Hit,
            GuessResult::Near => Cell::HurtMarker,
            GuessResult::Miss => Cell::Miss,
        }
    }
}

/// Square grid of [`Cell`]s, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBoard")
)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "std")]
impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.size, raw.cells)
    }
}

/// Create an all-water board of `size×size` cells.
pub fn create_board(size: usize) -> Board {
    Board {
        size,
        cells: vec![Cell::Water; size * size],
    }
}

impl Board {
    /// Rebuild a board from row-major cells. There must be exactly `size*size`.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, ConfigError> {
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(ConfigError::InconsistentState(
                "board cell count does not match its size",
            ));
        }
        Ok(Board { size, cells })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `coord`, or `None` off the board.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        if coord.in_bounds(self.size) {
            Some(self.cells[coord.row * self.size + coord.col])
        } else {
            None
        }
    }

    pub(crate) fn mark(&mut self, coord: Coordinate, cell: Cell) -> Result<(), GameError> {
        if !coord.in_bounds(self.size) {
            return Err(GameError::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        self.cells[coord.row * self.size + coord.col] = cell;
        Ok(())
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` happy on a zero-sized board, which has no cells anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// `true` while no shot has landed on this board.
    pub fn is_untouched(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Water)
    }
}
