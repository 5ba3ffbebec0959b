//! Puzzle generation for the Gridoku Sudoku engine.
//!
//! Generation never searches for a solved board. It starts from one fixed,
//! hardcoded canonical solution and applies validity-preserving random
//! transformations: swapping two rows that lie in the same chunk band, and
//! two columns in the same chunk stack. A row swap inside one band moves
//! rows wholesale (row validity), keeps each chunk's value set intact
//! (chunk validity), and leaves columns untouched except for a permutation
//! within the band (column validity); the column swap is the same argument
//! transposed. Puzzles are then derived by greedily blanking cells in a
//! random order while the board still has a unique completion.
//!
//! All randomness is derived from a [`PuzzleSeed`], so generation is fully
//! reproducible.
//!
//! # Examples
//!
//! ```
//! use gridoku_generator::{PuzzleFactory, PuzzleSeed};
//! use gridoku_solver::Solve as _;
//!
//! let factory = PuzzleFactory::new();
//! let puzzle = factory.generate_with_seed(40, PuzzleSeed::from_phrase("doc"));
//!
//! assert!(puzzle.solution.is_solved());
//! assert!(!puzzle.problem.has_multiple_solutions());
//! assert_eq!(puzzle.problem.solutions().next(), Some(puzzle.solution));
//! ```

use gridoku_core::{Board, Index};
use gridoku_solver::Solve as _;
use log::debug;
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

pub mod seed;

pub use self::seed::{ParseSeedError, PuzzleSeed};

/// The canonical solved grid: the sole ancestor of every generated board.
const CANONICAL_ROWS: [[u8; 9]; 9] = [
    [4, 3, 5, 2, 6, 9, 7, 8, 1],
    [6, 8, 2, 5, 7, 1, 4, 9, 3],
    [1, 9, 7, 8, 3, 4, 5, 6, 2],
    [8, 2, 6, 1, 9, 5, 3, 4, 7],
    [3, 7, 4, 6, 8, 2, 9, 1, 5],
    [9, 5, 1, 7, 4, 3, 6, 2, 8],
    [5, 1, 9, 3, 2, 6, 8, 7, 4],
    [2, 4, 8, 9, 5, 7, 1, 3, 6],
    [7, 6, 3, 4, 1, 8, 2, 5, 9],
];

/// Returns the fixed, fully solved 9×9 reference board.
///
/// Every generated solved board is a row/column permutation of this one.
#[must_use]
pub fn canonical_solved() -> Board {
    Board::from_rows(&CANONICAL_ROWS).expect("the canonical grid is 9x9")
}

/// A generated puzzle together with its solution and the seed that made it.
///
/// Keeping the solution and seed alongside the problem lets callers verify
/// player input without re-solving and reproduce the exact puzzle later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle board, with a unique completion.
    pub problem: Board,
    /// The completion the puzzle was derived from.
    pub solution: Board,
    /// The seed that deterministically produced this puzzle.
    pub seed: PuzzleSeed,
}

/// Produces solved boards and minimal-hint puzzles.
///
/// # Examples
///
/// ```
/// use gridoku_generator::PuzzleFactory;
///
/// let factory = PuzzleFactory::new();
/// let solved = factory.generate_solved();
/// assert!(solved.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleFactory {
    shuffle_rounds: u32,
}

impl Default for PuzzleFactory {
    fn default() -> Self {
        Self {
            shuffle_rounds: Self::DEFAULT_SHUFFLE_ROUNDS,
        }
    }
}

impl PuzzleFactory {
    /// Number of shuffle rounds applied when deriving a solved board.
    pub const DEFAULT_SHUFFLE_ROUNDS: u32 = 1000;

    /// Creates a factory with the default number of shuffle rounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory with a custom number of shuffle rounds.
    ///
    /// Every round is validity-preserving, so any count yields a solved
    /// board; fewer rounds just mean less mixing.
    #[must_use]
    pub fn with_shuffle_rounds(shuffle_rounds: u32) -> Self {
        Self { shuffle_rounds }
    }

    /// Generates a fully solved board from a fresh random seed.
    #[must_use]
    pub fn generate_solved(&self) -> Board {
        self.generate_solved_with_seed(PuzzleSeed::random())
    }

    /// Generates a fully solved board from the given seed.
    #[must_use]
    pub fn generate_solved_with_seed(&self, seed: PuzzleSeed) -> Board {
        let mut rng = seed.rng();
        self.shuffle(canonical_solved(), &mut rng)
    }

    /// Generates a puzzle with a unique completion and at least `min_hints`
    /// filled cells, from a fresh random seed.
    #[must_use]
    pub fn generate_unsolved(&self, min_hints: usize) -> Board {
        self.generate_unsolved_with_seed(min_hints, PuzzleSeed::random())
    }

    /// Generates a puzzle with a unique completion and at least `min_hints`
    /// filled cells, from the given seed.
    #[must_use]
    pub fn generate_unsolved_with_seed(&self, min_hints: usize, seed: PuzzleSeed) -> Board {
        self.generate_with_seed(min_hints, seed).problem
    }

    /// Generates a puzzle, its solution, and the seed, from a fresh random
    /// seed.
    #[must_use]
    pub fn generate(&self, min_hints: usize) -> GeneratedPuzzle {
        self.generate_with_seed(min_hints, PuzzleSeed::random())
    }

    /// Generates a puzzle, its solution, and the seed, deterministically
    /// from the given seed.
    ///
    /// Cells are blanked greedily in a seed-determined random order. The
    /// pass ends as soon as a removal would admit a second solution (that
    /// cell is restored and no later cell is tried) or once
    /// `size² - min_hints` blanks are accepted, so the result may hold more
    /// than `min_hints` hints but never fewer.
    #[must_use]
    pub fn generate_with_seed(&self, min_hints: usize, seed: PuzzleSeed) -> GeneratedPuzzle {
        debug!("generating puzzle with seed {seed}, min_hints {min_hints}");
        let mut rng = seed.rng();
        let solution = self.shuffle(canonical_solved(), &mut rng);
        let problem = remove_cells(&solution, min_hints, &mut rng);
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }

    /// Mixes a solved board with validity-preserving row and column swaps.
    fn shuffle<R: Rng + ?Sized>(&self, mut board: Board, rng: &mut R) -> Board {
        for _ in 0..self.shuffle_rounds {
            board = swap_random_rows(&board, rng);
            board = swap_random_cols(&board, rng);
        }
        board
    }
}

/// Swaps two random rows belonging to the same chunk band.
fn swap_random_rows<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Board {
    let band = rng.random_range(0..board.num_chunks());
    let a = band * board.chunk_size() + rng.random_range(0..board.chunk_size());
    let b = band * board.chunk_size() + rng.random_range(0..board.chunk_size());
    swap_rows(board, a, b)
}

/// Swaps two random columns belonging to the same chunk stack.
fn swap_random_cols<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Board {
    let stack = rng.random_range(0..board.num_chunks());
    let a = stack * board.chunk_size() + rng.random_range(0..board.chunk_size());
    let b = stack * board.chunk_size() + rng.random_range(0..board.chunk_size());
    swap_cols(board, a, b)
}

fn swap_rows(board: &Board, a: u8, b: u8) -> Board {
    let mut board = board.clone();
    for col in 0..board.size() {
        board = swap_cells(&board, Index::new(a, col), Index::new(b, col));
    }
    board
}

fn swap_cols(board: &Board, a: u8, b: u8) -> Board {
    let mut board = board.clone();
    for row in 0..board.size() {
        board = swap_cells(&board, Index::new(row, a), Index::new(row, b));
    }
    board
}

fn swap_cells(board: &Board, a: Index, b: Index) -> Board {
    board.set(a, board.get(b)).set(b, board.get(a))
}

/// Greedily blanks cells of a solved board while the puzzle keeps a unique
/// completion.
fn remove_cells<R: Rng + ?Sized>(solution: &Board, min_hints: usize, rng: &mut R) -> Board {
    let total = usize::from(solution.size()) * usize::from(solution.size());
    let max_blanks = total.saturating_sub(min_hints);

    let mut order: Vec<Index> = solution.indices().collect();
    order.shuffle(rng);

    let mut board = solution.clone();
    let mut blanks = 0;
    for index in order {
        if blanks >= max_blanks {
            break;
        }
        let candidate = board.set(index, None);
        if candidate.has_multiple_solutions() {
            break;
        }
        board = candidate;
        blanks += 1;
    }
    debug!("accepted {blanks} blanks, {} hints remain", total - blanks);
    board
}
