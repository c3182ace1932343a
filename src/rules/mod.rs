//! Tile movement rules.
//!
//! - `transform`: pure board transformations (align, merge, score, spawn)
//! - `engine`: `RulesEngine` trait tying them into a playable rule set
//!
//! The game session calls into `RulesEngine` but never moves tiles itself.

pub mod engine;
pub mod transform;

pub use engine::{RulesEngine, StandardRules};
pub use transform::{
    add_random_tile, align, merge, score_from_merge, slide, spawn_tile, Points, Slide,
};
