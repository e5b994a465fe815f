//! Sliding-Tile Puzzle CLI
//!
//! Drives the puzzle engine from the command line: scrambles new games,
//! applies slides, and keeps the game on disk between invocations through
//! the persistence module's state file. Rows and columns are zero-based.

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tileslide::persistence::{self, LoadError};
use tileslide::{format_grid, Frame};

/// Plays an N×N sliding-tile puzzle from the command line.
#[derive(Parser)]
#[command(name = "tileslide")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new scrambled game.
    New {
        /// Board dimension (2 to 15).
        #[arg(long, default_value_t = 4)]
        size: usize,
    },
    /// Print the current board.
    Show,
    /// Slide the tile at the given cell into the blank.
    Slide { row: usize, col: usize },
    /// Restore the board to the scramble it started from.
    Reset,
    /// Re-scramble the current game in place.
    Scramble,
    /// Rank the available slides by how much disorder each leaves behind.
    Hint,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::New { size }) => run_new(size),
        Some(Command::Show) => run_show(),
        Some(Command::Slide { row, col }) => run_slide(row, col),
        Some(Command::Reset) => run_reset(),
        Some(Command::Scramble) => run_scramble(),
        Some(Command::Hint) => run_hint(),
        None => {
            // default: show the saved game, or start one
            match persistence::load() {
                Ok(frame) => print_board(&frame),
                Err(LoadError::Io(_)) => run_new(4),
                Err(error) => eprintln!("Saved game is unusable: {error}"),
            }
        }
    }
}

/// Scrambles a fresh board and saves it as the current game.
fn run_new(size: usize) {
    if !(2..=persistence::MAX_SIZE).contains(&size) {
        eprintln!("Board size must be between 2 and {}", persistence::MAX_SIZE);
        return;
    }
    let mut rng = StdRng::from_entropy();
    let frame = Frame::new(size, &mut rng);
    save_and_print(&frame);
}

fn run_show() {
    if let Some(frame) = load_or_report() {
        print_board(&frame);
    }
}

fn run_slide(row: usize, col: usize) {
    let Some(mut frame) = load_or_report() else {
        return;
    };

    if frame.slide(row, col) {
        save_and_print(&frame);
        if frame.win() {
            println!("Solved in {} moves!", frame.moves());
        }
    } else if frame.win() {
        println!("Already solved; run 'tileslide new' to keep playing.");
    } else {
        println!("Cannot slide ({row}, {col}); pick a tile next to the blank.");
    }
}

fn run_reset() {
    let Some(mut frame) = load_or_report() else {
        return;
    };
    frame.reset();
    save_and_print(&frame);
}

fn run_scramble() {
    let Some(mut frame) = load_or_report() else {
        return;
    };
    let mut rng = StdRng::from_entropy();
    frame.scramble(&mut rng);
    save_and_print(&frame);
}

fn run_hint() {
    let Some(frame) = load_or_report() else {
        return;
    };

    let candidates = hint_candidates(&frame);
    if candidates.is_empty() {
        println!("No moves available; the board is solved.");
        return;
    }
    for ((row, col), distance) in candidates {
        println!("slide {row} {col}  (disorder {distance})");
    }
}

/// Ranks the available slides by the disorder remaining after each one,
/// best first.
fn hint_candidates(frame: &Frame) -> Vec<((usize, usize), usize)> {
    let mut candidates: Vec<((usize, usize), usize)> = frame
        .visit()
        .into_iter()
        .filter_map(|child| {
            child
                .path()
                .last()
                .map(|&step| (step, child.total_distance()))
        })
        .collect();
    candidates.sort_by_key(|&(_, distance)| distance);
    candidates
}

/// Loads the saved game, reporting a usable hint when there is none.
fn load_or_report() -> Option<Frame> {
    match persistence::load() {
        Ok(frame) => Some(frame),
        Err(error) => {
            eprintln!("No playable saved game: {error}. Run 'tileslide new' first.");
            None
        }
    }
}

fn save_and_print(frame: &Frame) {
    if let Err(error) = persistence::save(frame) {
        eprintln!("Failed to save game: {error}");
    }
    print_board(frame);
}

fn print_board(frame: &Frame) {
    print!("{}", format_grid(frame.tiles()));
    println!("Moves: {}", frame.moves());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_prefers_the_winning_slide() {
        // one slide away from solved: tile 7 sits right of the blank
        let order = [0, 1, 2, 3, 4, 5, 6, 8, 7];
        let frame = Frame::from_saved(3, &order, &order, 0).unwrap();

        let candidates = hint_candidates(&frame);
        assert_eq!(candidates.first(), Some(&((2, 2), 0)));
    }

    #[test]
    fn test_hint_is_empty_for_a_solved_board() {
        let solved: Vec<usize> = (0..9).collect();
        let frame = Frame::from_saved(3, &solved, &solved, 0).unwrap();
        assert!(hint_candidates(&frame).is_empty());
    }
}
