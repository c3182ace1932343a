//! Error type shared by the board, the transformations and the game session.
//!
//! Every error is raised before any state is touched, so a failed call leaves
//! the board and score exactly as they were.

/// Errors raised by the engine.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A cell accessor was called with coordinates outside the board.
    #[error("cell ({i}, {j}) is outside the board (indices must be in 0..{size})")]
    OutOfRange { i: usize, j: usize, size: usize },

    /// The caller supplied a value the engine cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation's precondition does not hold in the current state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A saved game could not be encoded or decoded.
    #[error("saved game codec error: {0}")]
    Codec(#[from] bincode::Error),
}

impl GameError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        GameError::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        GameError::InvalidState(msg.into())
    }
}
