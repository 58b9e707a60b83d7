//! Single-cell ships and their random placement.

use rand::seq::index;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{ConfigError, Coordinate, GameError};

/// Intact ships of one side, one bit per ship cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSet {
    map: BitBoard<u128>,
}

impl ShipSet {
    /// An empty fleet on a `size×size` board.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            map: BitBoard::try_new(size)?,
        })
    }

    /// Build a fleet from explicit positions. Duplicate positions collapse.
    pub fn from_coords<I>(size: usize, coords: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let map = BitBoard::from_iter(size, coords.into_iter().map(|c| (c.row, c.col)))?;
        Ok(Self { map })
    }

    /// Side length of the board these ships sit on.
    pub fn size(&self) -> usize {
        self.map.size()
    }

    /// Number of intact ships.
    pub fn len(&self) -> usize {
        self.map.count_ones()
    }

    /// `true` once every ship has been sunk.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether an intact ship sits at `coord`. Off-board coordinates never match.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.map.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Sink the ship at `coord`. Returns `false` if there was none.
    pub(crate) fn remove(&mut self, coord: Coordinate) -> bool {
        if !self.contains(coord) {
            return false;
        }
        self.map.clear(coord.row, coord.col).is_ok()
    }

    pub(crate) fn bits(&self) -> BitBoard<u128> {
        self.map
    }

    fn insert(&mut self, coord: Coordinate) -> Result<(), GameError> {
        self.map.set(coord.row, coord.col)?;
        Ok(())
    }

    /// Intact ship positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        self.map.iter_set_bits().map(Coordinate::from)
    }
}

/// Draw `count` distinct positions uniformly at random from a `size×size`
/// board. Fails before drawing anything if the fleet cannot fit.
pub fn place_ships<R: Rng + ?Sized>(
    size: usize,
    count: usize,
    rng: &mut R,
) -> Result<ShipSet, GameError> {
    let mut ships = ShipSet::new(size)?;
    let cells = size * size;
    if count > cells {
        return Err(ConfigError::TooManyShips {
            ships: count,
            cells,
        }
        .into());
    }
    let picks = index::sample(rng, cells, count);
    for idx in picks.iter() {
        ships.insert(Coordinate::new(idx / size, idx % size))?;
    }
    Ok(ships)
}

/// `true` iff one of the eight cells around `coord` holds an intact ship.
/// The centre itself is not considered.
pub fn is_adjacent_to_ship(coord: Coordinate, ships: &ShipSet) -> bool {
    coord.neighbors().any(|n| ships.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn place_fills_whole_board() {
        let mut rng = SmallRng::seed_from_u64(7);
        let ships = place_ships(3, 9, &mut rng).unwrap();
        assert_eq!(ships.len(), 9);
    }

    #[test]
    fn place_rejects_overfull_fleet() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(
            place_ships(2, 5, &mut rng),
            Err(GameError::Configuration(ConfigError::TooManyShips {
                ships: 5,
                cells: 4
            }))
        );
    }

    #[test]
    fn centre_is_not_its_own_neighbour() {
        let ships = ShipSet::from_coords(5, [Coordinate::new(2, 2)]).unwrap();
        assert!(!is_adjacent_to_ship(Coordinate::new(2, 2), &ships));
    }

    #[test]
    fn corner_neighbours_stay_on_board() {
        let ships = ShipSet::from_coords(5, [Coordinate::new(4, 4)]).unwrap();
        assert!(is_adjacent_to_ship(Coordinate::new(3, 3), &ships));
        assert!(!is_adjacent_to_ship(Coordinate::new(0, 0), &ships));
    }

    #[test]
    fn remove_sinks_once() {
        let mut ships = ShipSet::from_coords(5, [Coordinate::new(1, 1)]).unwrap();
        assert!(ships.remove(Coordinate::new(1, 1)));
        assert!(!ships.remove(Coordinate::new(1, 1)));
        assert!(ships.is_empty());
    }
}
