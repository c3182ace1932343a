//! Score and high score.

use crate::core::GameError;
use crate::rules::Points;

/// Current score and best score, with `high >= current` at all times.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    current: Points,
    high: Points,
}

impl Score {
    /// Create a score from saved values.
    ///
    /// Fails with `InvalidArgument` if either value is negative or the high
    /// score is below the score.
    pub fn new(current: Points, high: Points) -> Result<Self, GameError> {
        if current < 0 || high < 0 {
            return Err(GameError::invalid_argument(
                "score and high score must not be negative",
            ));
        }
        if high < current {
            return Err(GameError::invalid_argument(
                "high score must not be less than score",
            ));
        }
        Ok(Self { current, high })
    }

    /// Current score.
    #[must_use]
    pub fn current(&self) -> Points {
        self.current
    }

    /// Best score so far.
    #[must_use]
    pub fn high(&self) -> Points {
        self.high
    }

    /// Add points, raising the high score if it is passed.
    ///
    /// Fails with `InvalidArgument` for a negative delta.
    pub fn add(&mut self, points: Points) -> Result<(), GameError> {
        if points < 0 {
            return Err(GameError::invalid_argument("points must not be negative"));
        }
        self.current = self.current.saturating_add(points);
        self.high = self.high.max(self.current);
        Ok(())
    }

    /// Reset the score to 0. The high score is kept.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}
