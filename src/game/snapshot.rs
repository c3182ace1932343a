//! Saved games.
//!
//! `SavedGame` carries what a front end needs to persist: the board, the two
//! scores and, optionally, the RNG state so the restored game spawns the same
//! tiles the saved one would have. Where and how the bytes are stored is up to
//! the caller; `to_bytes`/`from_bytes` provide a compact bincode encoding.
//!
//! Decoding never validates. `Game::restore` runs the same checks as
//! `Game::resume_game` before adopting a saved game.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameError, GameRngState};
use crate::rules::Points;

/// Everything needed to continue a game later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Board,
    pub score: Points,
    pub high_score: Points,
    /// `None` continues with the restoring game's own RNG.
    pub rng: Option<GameRngState>,
}

impl SavedGame {
    /// A saved game without RNG state.
    #[must_use]
    pub fn new(board: Board, score: Points, high_score: Points) -> Self {
        Self {
            board,
            score,
            high_score,
            rng: None,
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, GameConfig};
    use crate::game::Game;

    #[test]
    fn test_bytes_round_trip() {
        let mut game = Game::new(GameConfig::new().with_seed(9)).unwrap();
        let _ = game.make_move(Direction::Down);

        let saved = game.save();
        let bytes = saved.to_bytes().unwrap();
        let decoded = SavedGame::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, saved);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let saved = SavedGame::new(Board::from_rows([[2, 4, 8, 16]; 4]), 12, 40);
        let bytes = saved.to_bytes().unwrap();

        let err = SavedGame::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, GameError::Codec(_)));
    }

    #[test]
    fn test_restore_validates() {
        let mut game = Game::new(GameConfig::new().with_seed(1)).unwrap();
        let before = game.board();

        let bad = SavedGame::new(Board::new(), 50, 10);
        assert!(matches!(game.restore(&bad), Err(GameError::InvalidArgument(_))));
        assert_eq!(game.board(), before);
    }

    #[test]
    fn test_restore_without_rng_state() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [4, 0, 0, 0]]);
        let mut game = Game::new(GameConfig::new().with_seed(1)).unwrap();

        game.restore(&SavedGame::new(board, 20, 30)).unwrap();
        assert_eq!(game.board(), board);
        assert_eq!(game.score(), 20);
        assert_eq!(game.high_score(), 30);
    }
}
