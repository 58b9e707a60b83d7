use crate::common::ConfigError;

/// Side length of the board used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 5;
/// Ships per side used when no count is given.
pub const NUM_SHIPS: usize = 3;
/// Largest supported side length: the coordinate sets are packed into a `u128`.
pub const MAX_BOARD_SIZE: usize = 11;

/// Settings for a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub ship_count: usize,
    /// Fixed RNG seed for reproducible games; `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ship_count: NUM_SHIPS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_ship_count(mut self, ship_count: usize) -> Self {
        self.ship_count = ship_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cells on one board.
    pub fn cells(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Check the settings describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.ship_count == 0 {
            return Err(ConfigError::NoShips);
        }
        if self.ship_count > self.cells() {
            return Err(ConfigError::TooManyShips {
                ships: self.ship_count,
                cells: self.cells(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_playable() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.ship_count, 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn max_board_size_matches_u128_capacity() {
        assert_eq!(MAX_BOARD_SIZE, crate::bitboard::max_size::<u128>());
    }

    #[test]
    fn rejects_unplayable_settings() {
        let base = GameConfig::default();
        assert_eq!(
            base.with_board_size(0).validate(),
            Err(ConfigError::EmptyBoard)
        );
        assert_eq!(base.with_ship_count(0).validate(), Err(ConfigError::NoShips));
        assert_eq!(
            base.with_board_size(2).with_ship_count(5).validate(),
            Err(ConfigError::TooManyShips { ships: 5, cells: 4 })
        );
        assert_eq!(
            base.with_board_size(12).validate(),
            Err(ConfigError::BoardTooLarge { size: 12, max: 11 })
        );
        assert_eq!(base.with_board_size(2).with_ship_count(4).validate(), Ok(()));
    }
}
