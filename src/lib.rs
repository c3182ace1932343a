//! # rust-2048
//!
//! Rules engine for 2048-style sliding-tile puzzles.
//!
//! ## Design Principles
//!
//! 1. **One Algorithm, Four Directions**: A direction is data (an axis plus
//!    a traversal order), not a branch. Align and merge are written once
//!    against a line walk and reused for every direction.
//!
//! 2. **Values, Not Mutation**: `Board` is `Copy`. Every transformation
//!    returns a new board, which is what lets `can_move` compare a board
//!    with its transformed self.
//!
//! 3. **Explicit Sessions**: A `Game` is an ordinary value owned by the
//!    caller. Any number of games can run side by side.
//!
//! ## Modules
//!
//! - `core`: Board, directions, RNG, configuration, errors
//! - `rules`: Pure board transformations and the `RulesEngine` trait
//! - `game`: The turn state machine, scores and saved games
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, Game, GameConfig, MoveOutcome};
//!
//! let mut game = Game::new(GameConfig::new().with_seed(42)).unwrap();
//! assert_eq!(game.board().tile_count(), 2);
//!
//! for dir in Direction::ALL {
//!     if let MoveOutcome::Moved { points } = game.make_move(dir).unwrap() {
//!         assert!(points >= 0);
//!     }
//! }
//! assert!(game.high_score() >= game.score());
//! ```

pub mod core;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, Tile, Cell, SIZE, CELLS, MAX_TILE,
    Direction, Axis,
    GameRng, GameRngState,
    GameConfig, GameError,
};

pub use crate::rules::{
    RulesEngine, StandardRules,
    align, merge, score_from_merge, add_random_tile, slide, Slide, Points,
};

pub use crate::game::{Game, GameStatus, MoveOutcome, SavedGame, Score};
