//! This module contains logic for generating random boards.
//!
//! Generation of puzzles is done by first filling a configured board with a
//! random complete solution using a [Generator] and then removing some of
//! the values again using a [Reducer], which guarantees that the remaining
//! puzzle still has exactly one solution.

use crate::SudokuBoard;
use crate::cell::Progress;
use crate::error::{SudokuError, SudokuResult};

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly fills a configured board with a complete solution,
/// that is, an assignment satisfying every rule with no open cells beyond
/// the blocked ones. It uses a random number generator to decide the
/// content. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random values.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..len.saturating_sub(1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random values.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, board: &SudokuBoard) -> Option<SudokuBoard> {
        let mut board = board.clone();
        board.reset_candidates();

        if board.solve_to_fixed_point() == Progress::Contradiction {
            return None;
        }

        let (x, y) = match board.branching_cell() {
            None => return Some(board),
            Some(coordinates) => coordinates
        };
        let candidates =
            board.cell(x, y).unwrap().candidates().iter().collect::<Vec<_>>();

        for value in shuffle(&mut self.rng, candidates.into_iter()) {
            let mut copy = board.clone();
            copy.fix_cell(x, y, value);

            if let Some(filled) = self.fill_rec(&copy) {
                return Some(filled);
            }
        }

        None
    }

    /// Fills the given board with random values that satisfy its rules and
    /// keep all already assigned values. If that is not possible, an error
    /// is returned and the board remains unchanged.
    ///
    /// If no error is returned, it is guaranteed that
    /// [SudokuBoard::check_complete] on `board` returns `true` after this
    /// operation.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableBoard` if no complete assignment
    /// matches the rules and the values already present.
    pub fn fill(&mut self, board: &mut SudokuBoard) -> SudokuResult<()> {
        match self.fill_rec(board) {
            Some(filled) => {
                *board = filled;
                Ok(())
            },
            None => Err(SudokuError::UnsatisfiableBoard)
        }
    }
}

/// A reducer removes values from a completely assigned board as long as the
/// puzzle stays uniquely solvable. The result is a puzzle whose only
/// solution is the board the reduction started from. A random number
/// generator decides in which order removals are attempted.
///
/// [Reducer::new_default] yields a reducer with a [ThreadRng].
pub struct Reducer<R: Rng> {
    rng: R
}

impl Reducer<ThreadRng> {

    /// Creates a new reducer that uses a [ThreadRng] to decide the order of
    /// removals.
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(rand::thread_rng())
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer that uses the given random number generator to
    /// decide the order of removals.
    pub fn new(rng: R) -> Reducer<R> {
        Reducer {
            rng
        }
    }

    /// Removes as many values from the given board as possible while it
    /// stays uniquely solvable. Every removal is checked by solving the
    /// remaining puzzle; a removal that admits a second solution is
    /// reverted.
    pub fn reduce(&mut self, board: &mut SudokuBoard) {
        let mut assigned = Vec::new();

        for y in 0..board.height() {
            for x in 0..board.width() {
                if board.cell(x, y).unwrap().has_value() {
                    assigned.push((x, y));
                }
            }
        }

        for (x, y) in shuffle(&mut self.rng, assigned.into_iter()) {
            let value = board.cell(x, y).unwrap().value().unwrap();
            board.clear_value(x, y).unwrap();

            if board.solve().take(2).count() != 1 {
                board.set_value(x, y, value).unwrap();
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::factory;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut shuffled = shuffle(&mut rng, 1..=20);
        shuffled.sort_unstable();
        assert_eq!((1..=20).collect::<Vec<_>>(), shuffled);
    }

    #[test]
    fn fill_produces_a_complete_classic_board() {
        let mut board = factory::classic().unwrap();
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));

        generator.fill(&mut board).unwrap();

        assert!(board.check_complete());
        assert!(board.check_valid());
    }

    #[test]
    fn fill_keeps_assigned_values() {
        let mut board = factory::size_and_boxes(4, 4, 2, 2).unwrap();
        board.set_value(2, 1, 3).unwrap();
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));

        generator.fill(&mut board).unwrap();

        assert!(board.check_complete());
        assert_eq!(Some(3), board.cell(2, 1).unwrap().value());
    }

    #[test]
    fn fill_reports_unsatisfiable_boards() {
        let mut board = factory::size_and_boxes(4, 4, 2, 2).unwrap();
        board.set_value(0, 0, 1).unwrap();
        board.set_value(3, 0, 1).unwrap();
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(3));

        assert_eq!(Err(SudokuError::UnsatisfiableBoard),
            generator.fill(&mut board));
        assert_eq!(None, board.cell(1, 0).unwrap().value());
    }

    #[test]
    fn fill_leaves_blocked_cells_open() {
        let mut board = factory::size_and_boxes(4, 4, 2, 2).unwrap();
        board.block(3, 3).unwrap();
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(11));

        generator.fill(&mut board).unwrap();

        assert!(board.check_complete());
        assert_eq!(None, board.cell(3, 3).unwrap().value());
    }

    #[test]
    fn reduce_preserves_unique_solvability() {
        let mut board = factory::size_and_boxes(4, 4, 2, 2).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut generator = Generator::new(rng.clone());

        generator.fill(&mut board).unwrap();
        let solution = board.clone();

        let mut reducer = Reducer::new(&mut rng);
        reducer.reduce(&mut board);

        let solutions: Vec<_> = board.solve().collect();
        assert_eq!(1, solutions.len());
        assert_eq!(solution.to_row_strings().unwrap(),
            solutions[0].to_row_strings().unwrap());
    }

    #[test]
    fn samurai_board_can_be_filled() {
        let mut board = factory::samurai().unwrap();
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(5));

        generator.fill(&mut board).unwrap();

        assert!(board.check_complete());
        assert!(board.check_valid());
    }
}
