//! Move directions and the traversal order they induce.
//!
//! A direction picks an axis and an edge. Every row (for `Left`/`Right`) or
//! column (for `Up`/`Down`) is a *line*; walking a line starts at the edge
//! tiles slide toward and moves away from it. The transformations in
//! `rules::transform` are written once against this walk, so the four
//! directions share a single algorithm.
//!
//! ```
//! use rust_2048::core::Direction;
//!
//! // Row 1, walked from the right edge
//! let cells: Vec<_> = Direction::Right.line(1).collect();
//! assert_eq!(cells, vec![(3, 1), (2, 1), (1, 1), (0, 1)]);
//! ```

use serde::{Deserialize, Serialize};

use super::board::{Cell, SIZE};

/// Direction of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The axis along which tiles slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Tiles move along `i`; lines are rows.
    Horizontal,
    /// Tiles move along `j`; lines are columns.
    Vertical,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// True if tiles slide toward index 0 along the axis.
    #[must_use]
    pub const fn toward_origin(self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Coordinates of the `step`-th cell of line `line`, counting from the
    /// edge this direction slides toward.
    ///
    /// Both arguments must be below `SIZE`.
    #[must_use]
    pub fn cell(self, line: usize, step: usize) -> Cell {
        debug_assert!(line < SIZE && step < SIZE);
        let along = if self.toward_origin() {
            step
        } else {
            SIZE - 1 - step
        };
        match self.axis() {
            Axis::Horizontal => (along, line),
            Axis::Vertical => (line, along),
        }
    }

    /// Walk line `line` starting at the edge this direction slides toward.
    pub fn line(self, line: usize) -> impl Iterator<Item = Cell> {
        (0..SIZE).map(move |step| self.cell(line, step))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_axis() {
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert_eq!(Direction::Right.axis(), Axis::Horizontal);
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Down.axis(), Axis::Vertical);
    }

    #[test]
    fn test_opposite() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
            assert_eq!(dir.axis(), dir.opposite().axis());
        }
    }

    #[test]
    fn test_line_starts_at_edge() {
        assert_eq!(Direction::Left.cell(2, 0), (0, 2));
        assert_eq!(Direction::Right.cell(2, 0), (3, 2));
        assert_eq!(Direction::Up.cell(2, 0), (2, 0));
        assert_eq!(Direction::Down.cell(2, 0), (2, 3));
    }

    #[test]
    fn test_line_walk() {
        let up: Vec<_> = Direction::Up.line(0).collect();
        assert_eq!(up, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);

        let down: Vec<_> = Direction::Down.line(3).collect();
        assert_eq!(down, vec![(3, 3), (3, 2), (3, 1), (3, 0)]);
    }

    #[test]
    fn test_lines_cover_board_exactly_once() {
        for dir in Direction::ALL {
            let cells: HashSet<_> = (0..SIZE).flat_map(|line| dir.line(line)).collect();
            assert_eq!(cells.len(), SIZE * SIZE, "{dir} must visit every cell once");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
