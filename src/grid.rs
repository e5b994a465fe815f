//! Board representation and order serialization.
//!
//! The board is an N×N matrix of optional tiles stored as a flat row-major
//! vector. Exactly one cell is empty (the blank); every other cell holds a
//! tile with a unique home index. The serialized form is the row-major
//! "order" sequence of home indices, with the blank encoded as the sentinel
//! value `N²-1`.

use thiserror::Error;

use crate::tile::Tile;

/// Errors produced when rebuilding state from an order sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("board size {0} is below the minimum of 2")]
    SizeTooSmall(usize),
    #[error("order sequence has length {actual}, expected {expected}")]
    BadLength { expected: usize, actual: usize },
    #[error("order sequence is not a permutation of 0..{0}")]
    NotPermutation(usize),
}

/// An N×N board of optional tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Builds the solved board: tile `i` at row `i / N`, column `i % N`,
    /// with the last cell blank.
    pub fn solved(size: usize) -> Self {
        assert!(size >= 2, "board size must be at least 2");
        let count = size * size;
        let mut cells: Vec<Option<Tile>> =
            (0..count - 1).map(|home| Some(Tile::new(home))).collect();
        cells.push(None);
        Self { size, cells }
    }

    /// Rebuilds a board from a serialized order sequence.
    ///
    /// The sequence must have length `N²` and hold each value in `0..N²`
    /// exactly once, so a malformed sequence can never produce a board with
    /// a missing or duplicated blank.
    pub fn from_order(size: usize, order: &[usize]) -> Result<Self, StateError> {
        if size < 2 {
            return Err(StateError::SizeTooSmall(size));
        }
        let count = size * size;
        if order.len() != count {
            return Err(StateError::BadLength {
                expected: count,
                actual: order.len(),
            });
        }
        let mut seen = vec![false; count];
        for &value in order {
            if value >= count || seen[value] {
                return Err(StateError::NotPermutation(count));
            }
            seen[value] = true;
        }

        let blank = count - 1;
        let cells = order
            .iter()
            .map(|&value| (value != blank).then(|| Tile::new(value)))
            .collect();
        Ok(Self { size, cells })
    }

    /// The board dimension N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Converts `(row, col)` to a flat cell index.
    #[inline]
    pub fn position_to_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Converts a flat cell index to `(row, col)`.
    #[inline]
    pub fn index_to_position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Returns the tile at `(row, col)`, or `None` for the blank.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells[self.position_to_index(row, col)]
    }

    #[inline]
    pub(crate) fn at_index(&self, index: usize) -> Option<Tile> {
        self.cells[index]
    }

    /// Coordinates of the blank cell.
    pub fn blank_position(&self) -> (usize, usize) {
        let index = self
            .cells
            .iter()
            .position(Option::is_none)
            .expect("grid invariant: exactly one blank cell");
        self.index_to_position(index)
    }

    /// Swaps the contents of two cells given by coordinates.
    pub(crate) fn swap_cells(&mut self, from: (usize, usize), to: (usize, usize)) {
        let from = self.position_to_index(from.0, from.1);
        let to = self.position_to_index(to.0, to.1);
        self.cells.swap(from, to);
    }

    /// Swaps the contents of two cells given by flat indices.
    pub(crate) fn swap_indices(&mut self, from: usize, to: usize) {
        self.cells.swap(from, to);
    }

    /// Flattens the board row-major, substituting `N²-1` for the blank.
    pub fn order(&self) -> Vec<usize> {
        let blank = self.size * self.size - 1;
        self.cells
            .iter()
            .map(|cell| cell.map_or(blank, |tile| tile.home()))
            .collect()
    }
}

/// Formats a board as text, one row per line.
///
/// Tiles show their 1-based label right-aligned; the blank shows as '.'.
pub fn format_grid(grid: &Grid) -> String {
    let width = (grid.size() * grid.size() - 1).to_string().len();
    let mut output = String::new();

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if col > 0 {
                output.push(' ');
            }
            match grid.get(row, col) {
                Some(tile) => output.push_str(&format!("{:>width$}", tile.home() + 1)),
                None => output.push_str(&format!("{:>width$}", ".")),
            }
        }
        output.push('\n');
    }

    output
}
