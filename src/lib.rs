//! Sliding-Tile Puzzle Engine
//!
//! Owns the board state for an N×N sliding-tile ("15") puzzle: solvable
//! scrambles with permutation-parity correction, move validation and
//! application, win detection, and a flat order serialization for
//! persistence. The solver module contributes one-move successor generation
//! with a Manhattan-distance heuristic as scaffolding for a future search.

pub mod frame;
pub mod grid;
pub mod persistence;
mod solver;
pub mod tile;

pub use frame::{Direction, Frame};
pub use grid::{format_grid, Grid, StateError};
pub use tile::Tile;
