//! The tile value type.

/// A movable tile, identified by the index of its home cell.
///
/// The home index is the cell the tile occupies on the solved board and
/// doubles as its display label. Tiles carry no other state; two tiles are
/// equal iff their home indices match. Tiles are recreated by index when a
/// board is rebuilt from serialized form, never shared between boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    home: usize,
}

impl Tile {
    /// Creates the tile whose solved position is `home`.
    pub fn new(home: usize) -> Self {
        Self { home }
    }

    /// The index of this tile's cell on the solved board.
    #[inline]
    pub fn home(&self) -> usize {
        self.home
    }
}
