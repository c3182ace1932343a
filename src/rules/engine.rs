//! Rules engine trait for game sessions.
//!
//! A rules engine decides:
//! - How a board settles after a move (and how many points it earns)
//! - How new tiles appear
//! - Which moves are legal and when the game ends
//!
//! `Game` only talks to its board through this trait, so alternative tile
//! spawning or scoring rules plug in without touching the state machine.

use crate::core::{Board, Direction, GameConfig, GameError, GameRng, Tile};

use super::transform::{self, Slide};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `slide`: Must be pure; `can_move` relies on comparing its input and output
/// - `spawn_tile`: Must fail with `InvalidState` on a full board
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Settle a board after a move, without spawning a tile.
    fn slide(&self, board: &Board, direction: Direction) -> Slide;

    /// Place one new tile on an empty cell.
    fn spawn_tile(&self, board: &Board, rng: &mut GameRng) -> Result<Board, GameError>;

    // === Convenience Methods ===

    /// Check whether moving in `direction` would change the board.
    ///
    /// Aligning is tried first; only when alignment changes nothing is the
    /// aligned board merged and compared.
    fn can_move(&self, board: &Board, direction: Direction) -> bool {
        let aligned = transform::align(board, direction);
        if aligned != *board {
            return true;
        }
        transform::merge(&aligned, direction) != *board
    }

    /// Directions in which a move changes the board.
    fn legal_moves(&self, board: &Board) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(board, dir))
            .collect()
    }

    /// Check if no move changes the board.
    fn is_terminal(&self, board: &Board) -> bool {
        Direction::ALL
            .into_iter()
            .all(|dir| !self.can_move(board, dir))
    }

    /// Next milestone tile: the configured target until it is reached, then
    /// double the largest tile on the board.
    fn next_milestone(&self, board: &Board) -> Tile {
        let target = self.config().target_tile;
        let max = board.max_tile();
        if max < target {
            target
        } else {
            max.saturating_mul(2)
        }
    }
}

/// The classic rules: align-merge-align sliding and 2/4 spawns.
#[derive(Clone, Debug, Default)]
pub struct StandardRules {
    config: GameConfig,
}

impl StandardRules {
    /// Create rules from a configuration.
    ///
    /// Fails with `InvalidArgument` if the configuration does not validate.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl RulesEngine for StandardRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn slide(&self, board: &Board, direction: Direction) -> Slide {
        transform::slide(board, direction)
    }

    fn spawn_tile(&self, board: &Board, rng: &mut GameRng) -> Result<Board, GameError> {
        transform::spawn_tile(board, rng, self.config.four_probability)
    }
}
