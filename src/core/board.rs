//! The square grid of tiles.
//!
//! ## Coordinates
//!
//! A cell is addressed as `(i, j)` where `i` is the horizontal index (column)
//! and `j` the vertical index (row). `(0, 0)` is the top-left corner and
//! `(SIZE - 1, SIZE - 1)` the bottom-right one.
//!
//! ## Values
//!
//! `0` marks an empty cell. Every tile produced by the engine is a power of
//! two no smaller than 2. `Board` is a plain `Copy` value: transformations
//! always hand back a new board and never touch their input.
//!
//! ```
//! use rust_2048::core::Board;
//!
//! let mut board = Board::new();
//! board.set(1, 0, 2).unwrap();
//!
//! let copy = board;
//! board.set(1, 0, 4).unwrap();
//!
//! assert_eq!(copy.get(1, 0).unwrap(), 2);
//! assert_eq!(board.get(1, 0).unwrap(), 4);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;

/// Width and height of the board.
pub const SIZE: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Value held by one cell. `0` means empty.
pub type Tile = u32;

/// Largest tile a cell can hold. Two `MAX_TILE` tiles never merge.
pub const MAX_TILE: Tile = 1 << 31;

/// Cell coordinates `(i, j)`: horizontal index first.
pub type Cell = (usize, usize);

/// A `SIZE` x `SIZE` grid of tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Indexed as `tiles[i][j]`.
    tiles: [[Tile; SIZE]; SIZE],
}

impl Board {
    /// Width and height of the board.
    pub const SIZE: usize = SIZE;

    /// A board with every cell empty.
    pub const EMPTY: Board = Board {
        tiles: [[0; SIZE]; SIZE],
    };

    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a board from rows listed top to bottom.
    ///
    /// `rows[j][i]` becomes the tile at `(i, j)`, so the literal reads the
    /// way the board looks on screen.
    ///
    /// ```
    /// use rust_2048::core::Board;
    ///
    /// let board = Board::from_rows([
    ///     [2, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 4],
    /// ]);
    /// assert_eq!(board.get(0, 0).unwrap(), 2);
    /// assert_eq!(board.get(3, 3).unwrap(), 4);
    /// ```
    #[must_use]
    pub fn from_rows(rows: [[Tile; SIZE]; SIZE]) -> Self {
        let mut board = Self::new();
        for (j, row) in rows.iter().enumerate() {
            for (i, &value) in row.iter().enumerate() {
                board.tiles[i][j] = value;
            }
        }
        board
    }

    /// The board as rows listed top to bottom (inverse of `from_rows`).
    #[must_use]
    pub fn rows(&self) -> [[Tile; SIZE]; SIZE] {
        let mut rows = [[0; SIZE]; SIZE];
        for (j, row) in rows.iter_mut().enumerate() {
            for (i, value) in row.iter_mut().enumerate() {
                *value = self.tiles[i][j];
            }
        }
        rows
    }

    /// Get the tile at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<Tile, GameError> {
        Self::check(i, j)?;
        Ok(self.tiles[i][j])
    }

    /// Set the tile at `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: Tile) -> Result<(), GameError> {
        Self::check(i, j)?;
        self.tiles[i][j] = value;
        Ok(())
    }

    /// Check whether the cell at `(i, j)` is empty.
    pub fn is_empty(&self, i: usize, j: usize) -> Result<bool, GameError> {
        Ok(self.get(i, j)? == 0)
    }

    /// Check whether every cell holds a tile.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values().all(|v| v != 0)
    }

    /// Coordinates of every empty cell, column by column.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Cell; CELLS]> {
        Self::cells().filter(|&cell| self.at(cell) == 0).collect()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.values().filter(|&v| v != 0).count()
    }

    /// Largest tile on the board, `0` for an empty board.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.values().max().unwrap_or(0)
    }

    /// Check that every cell is empty or holds a power of two no smaller than 2.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.values().all(is_valid_tile)
    }

    /// Iterate over all cell coordinates, column by column.
    pub fn cells() -> impl Iterator<Item = Cell> {
        (0..SIZE).flat_map(|i| (0..SIZE).map(move |j| (i, j)))
    }

    fn values(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().flatten().copied()
    }

    fn check(i: usize, j: usize) -> Result<(), GameError> {
        if i >= SIZE || j >= SIZE {
            return Err(GameError::OutOfRange { i, j, size: SIZE });
        }
        Ok(())
    }

    /// Unchecked read for coordinates produced by the engine itself.
    #[inline]
    pub(crate) fn at(&self, (i, j): Cell) -> Tile {
        self.tiles[i][j]
    }

    /// Unchecked write for coordinates produced by the engine itself.
    #[inline]
    pub(crate) fn put(&mut self, (i, j): Cell, value: Tile) {
        self.tiles[i][j] = value;
    }
}

/// `0`, or a power of two no smaller than 2.
#[must_use]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().to_string().len().max(1);
        for (n, row) in self.rows().iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&v| match v {
                    0 => format!("{:>width$}", ".", width = width),
                    v => format!("{:>width$}", v, width = width),
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
