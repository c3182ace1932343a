//! Pure board transformations.
//!
//! Every function takes a board snapshot and returns a new value; the input
//! is never modified. All four directions run through the same line routines:
//! a board is read one line at a time in the direction's traversal order
//! (see `Direction::line`), the line is rewritten as a plain `[Tile; SIZE]`
//! with index 0 at the edge tiles slide toward, and the result is written
//! back along the same walk.
//!
//! ## Merge rule
//!
//! A line is scanned once from the edge. Two adjacent equal tiles merge into
//! the one nearer the edge and the other becomes empty. A tile consumed as
//! the back half of a pair is skipped, so `[2, 2, 2, 0]` merges to
//! `[4, 0, 2, 0]` and `[2, 2, 2, 2]` to `[4, 0, 4, 0]`. Empty cells are never
//! skipped over: `[2, 0, 2, 0]` does not merge.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::config::DEFAULT_FOUR_PROBABILITY;
use crate::core::{Board, Direction, GameError, GameRng, Tile, MAX_TILE, SIZE};

/// Score points. Signed so that callers can hand in unchecked values.
pub type Points = i64;

/// One row or column, index 0 at the edge tiles slide toward.
type Line = [Tile; SIZE];

/// Result of sliding a board: the settled board and the points earned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    /// Board after align, merge and re-align. No tile has been spawned yet.
    pub board: Board,
    /// Points earned by the merges.
    pub points: Points,
}

/// Compact every line toward the direction's edge, keeping tile order.
#[must_use]
pub fn align(board: &Board, direction: Direction) -> Board {
    map_lines(board, direction, |line| {
        let mut out = [0; SIZE];
        for (slot, value) in out.iter_mut().zip(line.iter().copied().filter(|&v| v != 0)) {
            *slot = value;
        }
        out
    })
}

/// Merge adjacent equal pairs along the direction without closing the gaps
/// the merges leave behind.
#[must_use]
pub fn merge(board: &Board, direction: Direction) -> Board {
    map_lines(board, direction, |line| {
        let mut out = *line;
        for front in merge_pairs(line) {
            out[front] *= 2;
            out[front + 1] = 0;
        }
        out
    })
}

/// Points `merge` would earn on this board: each merging pair scores the sum
/// of its two tiles.
#[must_use]
pub fn score_from_merge(board: &Board, direction: Direction) -> Points {
    (0..SIZE)
        .map(|n| {
            let line = read_line(board, direction, n);
            merge_pairs(&line)
                .into_iter()
                .map(|front| 2 * Points::from(line[front]))
                .sum::<Points>()
        })
        .sum()
}

/// Full tile movement for one turn: align, score, merge, align again.
#[must_use]
pub fn slide(board: &Board, direction: Direction) -> Slide {
    let aligned = align(board, direction);
    let points = score_from_merge(&aligned, direction);
    let merged = merge(&aligned, direction);
    Slide {
        board: align(&merged, direction),
        points,
    }
}

/// Place a 2 (90%) or a 4 (10%) on an empty cell chosen uniformly at random.
///
/// Fails with `InvalidState` when the board is full.
pub fn add_random_tile(board: &Board, rng: &mut GameRng) -> Result<Board, GameError> {
    spawn_tile(board, rng, DEFAULT_FOUR_PROBABILITY)
}

/// `add_random_tile` with a caller-chosen chance of spawning a 4.
///
/// `four_probability` must lie in `[0, 1]`.
pub fn spawn_tile(
    board: &Board,
    rng: &mut GameRng,
    four_probability: f64,
) -> Result<Board, GameError> {
    let empty = board.empty_cells();
    let Some(&cell) = rng.choose(&empty) else {
        return Err(GameError::invalid_state(
            "cannot add a random tile to a full board",
        ));
    };
    let value = if rng.gen_bool(four_probability) { 4 } else { 2 };

    let mut out = *board;
    out.put(cell, value);
    trace!(i = cell.0, j = cell.1, value, "spawned tile");
    Ok(out)
}

/// Indices of the front tile of every pair that merges in one pass.
fn merge_pairs(line: &Line) -> SmallVec<[usize; SIZE]> {
    let mut fronts = SmallVec::new();
    let mut step = 0;
    while step + 1 < SIZE {
        let front = line[step];
        if front != 0 && front < MAX_TILE && front == line[step + 1] {
            fronts.push(step);
            // The back tile is consumed and cannot start another pair
            step += 2;
        } else {
            step += 1;
        }
    }
    fronts
}

fn read_line(board: &Board, direction: Direction, n: usize) -> Line {
    let mut line = [0; SIZE];
    for (slot, cell) in line.iter_mut().zip(direction.line(n)) {
        *slot = board.at(cell);
    }
    line
}

fn write_line(board: &mut Board, direction: Direction, n: usize, line: &Line) {
    for (&value, cell) in line.iter().zip(direction.line(n)) {
        board.put(cell, value);
    }
}

fn map_lines(board: &Board, direction: Direction, f: impl Fn(&Line) -> Line) -> Board {
    let mut out = Board::new();
    for n in 0..SIZE {
        let line = f(&read_line(board, direction, n));
        write_line(&mut out, direction, n, &line);
    }
    out
}
