//! Core engine types: board, directions, RNG, configuration, errors.
//!
//! These are plain values with no game logic. The rules that move tiles
//! live in `rules`; the turn state machine lives in `game`.

pub mod board;
pub mod direction;
pub mod rng;
pub mod config;
pub mod error;

pub use board::{is_valid_tile, Board, Cell, Tile, CELLS, MAX_TILE, SIZE};
pub use direction::{Axis, Direction};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use error::GameError;
