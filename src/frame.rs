//! The puzzle state engine.
//!
//! A [`Frame`] owns the live board, the start snapshot taken after the last
//! scramble, the move counter, and the cached win flag. Scrambles are
//! corrected for solvability: a board is reachable from the solved state iff
//! the parity of its tile permutation plus the blank's taxicab distance from
//! its home cell is even, so an odd shuffle is repaired by swapping one pair
//! of non-blank tiles.

use rand::Rng;
use tracing::debug;

use crate::grid::{Grid, StateError};

/// The four slide directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Probe order used by [`Frame::slide`].
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Row/column deltas for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Applies this direction to `(row, col)`, returning the neighbor cell
    /// or `None` when it falls outside an N×N board.
    pub fn step(self, row: usize, col: usize, size: usize) -> Option<(usize, usize)> {
        let (row_delta, col_delta) = self.delta();
        let row = row.checked_add_signed(row_delta)?;
        let col = col.checked_add_signed(col_delta)?;
        (row < size && col < size).then_some((row, col))
    }
}

/// The puzzle state engine: live board, start snapshot, move counter, win
/// flag, and the bookkeeping used by successor-state expansion.
#[derive(Debug, Clone)]
pub struct Frame {
    size: usize,
    tiles: Grid,
    start: Grid,
    moves: u32,
    win: bool,
    last_move: Option<usize>,
    path: Vec<(usize, usize)>,
}

impl Frame {
    /// Creates an engine of the given size with a solvable scramble already
    /// applied, drawing from the injected random source.
    pub fn new(size: usize, rng: &mut impl Rng) -> Self {
        assert!(size >= 2, "board size must be at least 2");
        let tiles = Grid::solved(size);
        let start = tiles.clone();
        let mut frame = Self {
            size,
            tiles,
            start,
            moves: 0,
            win: false,
            last_move: None,
            path: Vec::new(),
        };
        frame.scramble(rng);
        frame
    }

    /// Restores an engine from its persisted surface: the two order
    /// sequences plus the move counter.
    ///
    /// The win flag is recomputed from the restored board, so a saved solved
    /// game comes back solved (and frozen).
    pub fn from_saved(
        size: usize,
        tiles_order: &[usize],
        start_order: &[usize],
        moves: u32,
    ) -> Result<Self, StateError> {
        let tiles = Grid::from_order(size, tiles_order)?;
        let start = Grid::from_order(size, start_order)?;
        let mut frame = Self {
            size,
            tiles,
            start,
            moves,
            win: false,
            last_move: None,
            path: Vec::new(),
        };
        frame.win = frame.is_win();
        Ok(frame)
    }

    /// The board dimension N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The live board.
    #[inline]
    pub fn tiles(&self) -> &Grid {
        &self.tiles
    }

    /// The snapshot restored by [`Frame::reset`].
    #[inline]
    pub fn start(&self) -> &Grid {
        &self.start
    }

    /// Successful slides since the last scramble or reset.
    #[inline]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Cached win flag, kept in sync by every mutating operation.
    #[inline]
    pub fn win(&self) -> bool {
        self.win
    }

    /// Home index of the most recently slid tile, if any.
    #[inline]
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Moves recorded onto this frame during successor-state expansion.
    #[inline]
    pub fn path(&self) -> &[(usize, usize)] {
        &self.path
    }

    pub(crate) fn push_path(&mut self, step: (usize, usize)) {
        self.path.push(step);
    }

    /// Re-randomizes the board, corrects its parity, and snapshots the
    /// result as the new start position. The move counter, last-move record,
    /// and path are cleared, and the win flag is recomputed.
    pub fn scramble(&mut self, rng: &mut impl Rng) {
        self.shuffle(rng);
        if !self.parity_even() {
            debug!("shuffle parity is odd, swapping a corrective pair");
            self.swap_random_pair(rng);
        }
        self.start = self.tiles.clone();
        self.moves = 0;
        self.last_move = None;
        self.path.clear();
        self.win = self.is_win();
    }

    /// Fisher–Yates shuffle over the N² cells, blank included.
    fn shuffle(&mut self, rng: &mut impl Rng) {
        for to in (1..self.size * self.size).rev() {
            let from = rng.gen_range(0..=to);
            if from != to {
                self.tiles.swap_indices(from, to);
            }
        }
    }

    /// Solvability parity of the live board, computed on a working copy.
    ///
    /// Sums the blank's taxicab distance from its home cell with the number
    /// of transpositions a cycle-decomposition walk needs to sort the board
    /// into home order. Even parity means the board is reachable from the
    /// solved state; each legal slide preserves this parity.
    fn parity_even(&self) -> bool {
        let count = self.size * self.size;
        let blank_home = count - 1;
        let (blank_row, blank_col) = self.tiles.blank_position();
        let mut sum = self.distance_home(blank_row, blank_col);

        let mut work = self.tiles.clone();
        for from in 0..count {
            loop {
                let to = work.at_index(from).map_or(blank_home, |tile| tile.home());
                if to == from {
                    break;
                }
                work.swap_indices(from, to);
                sum += 1;
            }
        }

        sum % 2 == 0
    }

    /// Swaps two distinct non-blank cells chosen uniformly, flipping the
    /// permutation parity without moving the blank.
    fn swap_random_pair(&mut self, rng: &mut impl Rng) {
        let count = self.size * self.size;
        let mut from = rng.gen_range(0..count);
        while self.tiles.at_index(from).is_none() {
            from = rng.gen_range(0..count);
        }
        let mut to = rng.gen_range(0..count);
        while to == from || self.tiles.at_index(to).is_none() {
            to = rng.gen_range(0..count);
        }
        self.tiles.swap_indices(from, to);
    }

    /// Attempts to slide the tile at `(row, col)` into an adjacent blank.
    ///
    /// Directions are probed in the fixed order up, right, down, left and
    /// the first legal one is applied. Returns `false` without mutating
    /// anything when the cell is out of bounds or blank, no neighboring cell
    /// is blank, or the puzzle is already solved (a won board is frozen).
    pub fn slide(&mut self, row: usize, col: usize) -> bool {
        if self.win || row >= self.size || col >= self.size {
            return false;
        }
        let Some(tile) = self.tiles.get(row, col) else {
            return false;
        };

        for direction in Direction::ALL {
            let Some((to_row, to_col)) = direction.step(row, col, self.size) else {
                continue;
            };
            if self.tiles.get(to_row, to_col).is_some() {
                continue;
            }
            self.tiles.swap_cells((row, col), (to_row, to_col));
            self.win = self.is_win();
            self.moves += 1;
            self.last_move = Some(tile.home());
            debug!(
                row,
                col,
                tile = tile.home(),
                moves = self.moves,
                win = self.win,
                "slide applied"
            );
            return true;
        }

        false
    }

    /// Recomputes the win predicate from the live board.
    ///
    /// True iff the row-major order, with the blank read as `N²-1`, is the
    /// strictly increasing sequence `0, 1, …, N²-1`.
    pub fn is_win(&self) -> bool {
        let count = self.size * self.size;
        let blank = count - 1;
        (0..count).all(|index| {
            self.tiles
                .at_index(index)
                .map_or(blank, |tile| tile.home())
                == index
        })
    }

    /// Restores the board to the start snapshot and zeroes the counter.
    ///
    /// The win flag is recomputed from the restored board rather than
    /// carried over, so a previously solved puzzle does not stay frozen.
    pub fn reset(&mut self) {
        self.tiles = self.start.clone();
        self.moves = 0;
        self.last_move = None;
        self.path.clear();
        self.win = self.is_win();
    }

    /// Row-major order of the live board, blank encoded as `N²-1`.
    pub fn tiles_order(&self) -> Vec<usize> {
        self.tiles.order()
    }

    /// Row-major order of the start snapshot.
    pub fn start_order(&self) -> Vec<usize> {
        self.start.order()
    }

    /// Replaces the live board from an order sequence, revalidating it and
    /// recomputing the win flag.
    pub fn set_tiles_order(&mut self, order: &[usize]) -> Result<(), StateError> {
        self.tiles = Grid::from_order(self.size, order)?;
        self.win = self.is_win();
        Ok(())
    }

    /// Replaces the start snapshot from an order sequence.
    pub fn set_start_order(&mut self, order: &[usize]) -> Result<(), StateError> {
        self.start = Grid::from_order(self.size, order)?;
        Ok(())
    }

    /// Overwrites the move counter, as when restoring a saved game.
    pub fn set_moves(&mut self, moves: u32) {
        self.moves = moves;
    }
}
