//! Game sessions.
//!
//! - `session`: the `Game` turn state machine
//! - `score`: score / high score bookkeeping
//! - `snapshot`: `SavedGame` for persistence front ends

mod score;
mod session;
mod snapshot;

pub use score::Score;
pub use session::{Game, GameStatus, MoveOutcome};
pub use snapshot::SavedGame;
