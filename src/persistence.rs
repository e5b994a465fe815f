//! File I/O for saving and restoring a game in progress.
//!
//! Binary format for the state file (little endian):
//! - u32: board size N (2..=15)
//! - u32: move counter
//! - N² bytes: current board order, row-major, blank as N²-1
//! - N² bytes: start board order, row-major, blank as N²-1
//!
//! A human-readable rendering of the current board is written alongside.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::frame::Frame;
use crate::grid::{format_grid, StateError};

/// Default state file written by the CLI.
pub const STATE_BIN: &str = "tileslide.bin";
/// Default text rendering written next to the state file.
pub const STATE_TXT: &str = "tileslide.txt";

/// Largest board size the byte-per-cell format can carry.
pub const MAX_SIZE: usize = 15;

/// Errors produced when restoring a saved game.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read saved game: {0}")]
    Io(#[from] io::Error),
    #[error("saved game has unsupported board size {0}")]
    UnsupportedSize(u32),
    #[error("saved game is malformed: {0}")]
    State(#[from] StateError),
}

/// Saves the game to the default state and text files.
pub fn save(frame: &Frame) -> io::Result<()> {
    save_to(frame, Path::new(STATE_BIN), Path::new(STATE_TXT))
}

/// Saves the game as a binary state file plus a text rendering.
pub fn save_to(frame: &Frame, bin_path: &Path, txt_path: &Path) -> io::Result<()> {
    save_text(frame, txt_path)?;
    save_binary(frame, bin_path)?;
    Ok(())
}

/// Writes the human-readable rendering of the current board.
fn save_text(frame: &Frame, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Moves: {}", frame.moves())?;
    writeln!(file, "Solved: {}", if frame.win() { "yes" } else { "no" })?;
    writeln!(file)?;
    write!(file, "{}", format_grid(frame.tiles()))?;
    Ok(())
}

/// Writes the compact binary state file.
fn save_binary(frame: &Frame, path: &Path) -> io::Result<()> {
    if frame.size() > MAX_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "board size does not fit the byte-per-cell format",
        ));
    }

    let mut file = File::create(path)?;
    file.write_all(&(frame.size() as u32).to_le_bytes())?;
    file.write_all(&frame.moves().to_le_bytes())?;
    write_order(&mut file, &frame.tiles_order())?;
    write_order(&mut file, &frame.start_order())?;
    Ok(())
}

fn write_order(file: &mut File, order: &[usize]) -> io::Result<()> {
    let bytes: Vec<u8> = order.iter().map(|&value| value as u8).collect();
    file.write_all(&bytes)
}

/// Loads the game from the default state file.
pub fn load() -> Result<Frame, LoadError> {
    load_from(Path::new(STATE_BIN))
}

/// Loads a game from a binary state file, validating the board state.
pub fn load_from(path: &Path) -> Result<Frame, LoadError> {
    let mut file = File::open(path)?;
    let mut u32_buffer = [0u8; 4];

    file.read_exact(&mut u32_buffer)?;
    let size = u32::from_le_bytes(u32_buffer);
    if !(2..=MAX_SIZE as u32).contains(&size) {
        return Err(LoadError::UnsupportedSize(size));
    }
    let size = size as usize;

    file.read_exact(&mut u32_buffer)?;
    let moves = u32::from_le_bytes(u32_buffer);

    let tiles_order = read_order(&mut file, size * size)?;
    let start_order = read_order(&mut file, size * size)?;

    Ok(Frame::from_saved(size, &tiles_order, &start_order, moves)?)
}

fn read_order(file: &mut File, count: usize) -> io::Result<Vec<usize>> {
    let mut bytes = vec![0u8; count];
    file.read_exact(&mut bytes)?;
    Ok(bytes.iter().map(|&byte| byte as usize).collect())
}
