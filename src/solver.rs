//! Successor-state generation for a future solver.
//!
//! Building blocks for a search-based solver or hint feature:
//! [`Frame::allowed_moves`] enumerates the cells that can slide,
//! [`Frame::visit`] produces the one-move successor frames while skipping
//! the immediate undo of the previous move, and [`Frame::distance_home`] /
//! [`Frame::total_distance`] provide a Manhattan-distance heuristic.
//! Assembling a terminating search (BFS, IDA*, …) on top of these is future
//! work; nothing here loops.

use crate::frame::{Direction, Frame};

impl Frame {
    /// Coordinates of every cell orthogonally adjacent to the blank — the
    /// cells a slide could currently move.
    pub fn allowed_moves(&self) -> Vec<(usize, usize)> {
        let (blank_row, blank_col) = self.tiles().blank_position();
        Direction::ALL
            .iter()
            .filter_map(|direction| direction.step(blank_row, blank_col, self.size()))
            .collect()
    }

    /// One-move successor frames, excluding the immediate reverse of the
    /// previous move.
    ///
    /// Each successor is an independent deep copy with one allowed move
    /// applied and that move's coordinates appended to the copy's path. A
    /// solved frame is frozen and expands to nothing.
    pub fn visit(&self) -> Vec<Frame> {
        let mut children = Vec::new();
        for (row, col) in self.allowed_moves() {
            let Some(tile) = self.tiles().get(row, col) else {
                continue;
            };
            if Some(tile.home()) == self.last_move() {
                continue;
            }
            let mut child = self.clone();
            if child.slide(row, col) {
                child.push_path((row, col));
                children.push(child);
            }
        }
        children
    }

    /// Manhattan distance between the cell's occupant and its home cell.
    ///
    /// The blank's home is the last cell, so the blank contributes its own
    /// taxicab displacement; the parity analysis relies on that.
    pub fn distance_home(&self, row: usize, col: usize) -> usize {
        let size = self.size();
        let home = match self.tiles().get(row, col) {
            Some(tile) => tile.home(),
            None => size * size - 1,
        };
        let (home_row, home_col) = (home / size, home % size);
        row.abs_diff(home_row) + col.abs_diff(home_col)
    }

    /// Summed Manhattan distance of every tile from its home cell.
    ///
    /// The blank is not counted, which keeps the total an admissible
    /// estimate of the slides remaining. Zero iff the board is solved.
    pub fn total_distance(&self) -> usize {
        let size = self.size();
        let mut total = 0;
        for row in 0..size {
            for col in 0..size {
                if self.tiles().get(row, col).is_some() {
                    total += self.distance_home(row, col);
                }
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rustc_hash::FxHashSet;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Exhaustive search over order keys; completeness is unaffected by the
    /// anti-backtrack rule because an immediate undo only revisits a state
    /// already in the seen set.
    fn reaches_solved(start: Frame) -> bool {
        let mut seen: FxHashSet<Vec<usize>> = FxHashSet::default();
        let mut frontier = vec![start];
        while let Some(frame) = frontier.pop() {
            if frame.is_win() {
                return true;
            }
            if !seen.insert(frame.tiles_order()) {
                continue;
            }
            frontier.extend(frame.visit());
        }
        false
    }

    #[test]
    fn test_every_2x2_scramble_reaches_the_solved_board() {
        for seed in 0..40 {
            let frame = Frame::new(2, &mut seeded(seed));
            assert!(
                reaches_solved(frame),
                "seed {seed} produced an unsolvable scramble"
            );
        }
    }

    #[test]
    fn test_allowed_moves_are_the_blank_neighbors() {
        // blank in the center: four neighbors
        let center = [0, 1, 2, 3, 8, 5, 6, 7, 4];
        let frame = Frame::from_saved(3, &center, &center, 0).unwrap();
        let mut moves = frame.allowed_moves();
        moves.sort_unstable();
        assert_eq!(moves, vec![(0, 1), (1, 0), (1, 2), (2, 1)]);

        // blank in a corner: two neighbors
        let corner = [8, 1, 2, 3, 4, 5, 6, 7, 0];
        let frame = Frame::from_saved(3, &corner, &corner, 0).unwrap();
        let mut moves = frame.allowed_moves();
        moves.sort_unstable();
        assert_eq!(moves, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_visit_excludes_the_reverse_of_the_last_move() {
        let center = [0, 1, 2, 3, 8, 5, 6, 7, 4];
        let mut frame = Frame::from_saved(3, &center, &center, 0).unwrap();
        let before = frame.tiles_order();

        // tile 1 slides down into the center blank
        assert!(frame.slide(0, 1));
        assert_eq!(frame.last_move(), Some(1));

        let children = frame.visit();
        assert_eq!(children.len(), frame.allowed_moves().len() - 1);
        for child in &children {
            assert_ne!(
                child.tiles_order(),
                before,
                "a successor undid the previous move"
            );
        }
    }

    #[test]
    fn test_fresh_frame_excludes_no_successor() {
        let center = [0, 1, 2, 3, 8, 5, 6, 7, 4];
        let frame = Frame::from_saved(3, &center, &center, 0).unwrap();
        assert_eq!(frame.last_move(), None);
        assert_eq!(frame.visit().len(), frame.allowed_moves().len());
    }

    #[test]
    fn test_successors_record_their_move_and_count_it() {
        let center = [0, 1, 2, 3, 8, 5, 6, 7, 4];
        let frame = Frame::from_saved(3, &center, &center, 5).unwrap();

        for child in frame.visit() {
            assert_eq!(child.moves(), 6);
            assert_eq!(child.path().len(), 1);
            let &(row, col) = child.path().last().unwrap();
            // the slid cell is now the blank
            assert_eq!(child.tiles().get(row, col), None);
        }
    }

    #[test]
    fn test_won_frame_expands_to_nothing() {
        let solved: Vec<usize> = (0..9).collect();
        let frame = Frame::from_saved(3, &solved, &solved, 0).unwrap();
        assert!(frame.visit().is_empty());
    }

    #[test]
    fn test_distance_home_measures_taxicab_displacement() {
        // tile 0 parked in the far corner of a 3x3 board
        let order = [8, 1, 2, 3, 4, 5, 6, 7, 0];
        let frame = Frame::from_saved(3, &order, &order, 0).unwrap();
        assert_eq!(frame.distance_home(2, 2), 4);
        // the blank sits at (0, 0), four steps from its home in the last cell
        assert_eq!(frame.distance_home(0, 0), 4);
    }

    #[test]
    fn test_total_distance_is_zero_only_when_solved() {
        let solved: Vec<usize> = (0..9).collect();
        let frame = Frame::from_saved(3, &solved, &solved, 0).unwrap();
        assert_eq!(frame.total_distance(), 0);

        let one_away = [0, 1, 2, 3, 4, 5, 6, 8, 7];
        let frame = Frame::from_saved(3, &one_away, &one_away, 0).unwrap();
        assert_eq!(frame.total_distance(), 1);
    }

    #[test]
    fn test_total_distance_never_rises_by_more_than_one_slide() {
        // admissibility spot check: a slide changes the total by exactly one
        let mut frame = Frame::new(4, &mut seeded(43));
        for _ in 0..20 {
            let before = frame.total_distance();
            let (row, col) = frame.allowed_moves()[0];
            if !frame.slide(row, col) {
                break;
            }
            let after = frame.total_distance();
            assert_eq!(before.abs_diff(after), 1);
        }
    }
}
