//! Game configuration.
//!
//! The defaults describe the classic game: two starting tiles, a 10% chance
//! that a spawned tile is a 4, and 2048 as the first tile to reach.
//!
//! ```
//! use rust_2048::core::GameConfig;
//!
//! let config = GameConfig::new().with_seed(7).with_four_probability(0.25);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::board::{Tile, CELLS};
use super::error::GameError;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Tiles placed on an empty board by a new game.
pub const DEFAULT_STARTING_TILES: usize = 2;

/// First milestone tile.
pub const DEFAULT_TARGET_TILE: Tile = 2048;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Chance that a spawned tile is a 4.
    pub four_probability: f64,

    /// Tiles placed on an empty board when a new game starts.
    pub starting_tiles: usize,

    /// First milestone tile. Reaching it wins the game.
    pub target_tile: Tile,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            four_probability: DEFAULT_FOUR_PROBABILITY,
            starting_tiles: DEFAULT_STARTING_TILES,
            target_tile: DEFAULT_TARGET_TILE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the classic configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chance that a spawned tile is a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the number of tiles a new game starts with.
    #[must_use]
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }

    /// Set the first milestone tile.
    #[must_use]
    pub fn with_target_tile(mut self, tile: Tile) -> Self {
        self.target_tile = tile;
        self
    }

    /// Fix the RNG seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::invalid_argument(
                "four_probability must be in [0, 1]",
            ));
        }
        if self.starting_tiles == 0 || self.starting_tiles > CELLS {
            return Err(GameError::invalid_argument(format!(
                "starting_tiles must be in 1..={CELLS}"
            )));
        }
        if self.target_tile < 4 || !self.target_tile.is_power_of_two() {
            return Err(GameError::invalid_argument(
                "target_tile must be a power of two no smaller than 4",
            ));
        }
        Ok(())
    }
}
