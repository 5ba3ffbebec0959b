//! Backtracking solution enumeration for Gridoku boards.
//!
//! The solver is a lazy, depth-first enumerator: [`Solutions`] walks the
//! space of completions of a starting board and yields every fully solved
//! board consistent with its filled cells. Enumeration is pull-based, so a
//! caller that only needs the first one or two solutions pays only for
//! those — that is exactly how [`Solve::has_multiple_solutions`] keeps the
//! uniqueness check cheap during puzzle generation.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Board, Index};
//! use gridoku_solver::Solve as _;
//!
//! let puzzle: Board = ".234 3.12 21.3 432.".parse()?;
//! let solution = puzzle.solutions().next().unwrap();
//! assert!(solution.is_solved());
//! assert_eq!(solution.get(Index::new(0, 0)), Some(1));
//! # Ok::<(), gridoku_core::ParseBoardError>(())
//! ```

use gridoku_core::{Board, Index};

/// Solution enumeration operations on a board.
///
/// This is the seam between the immutable board value and the search: any
/// board can be asked for its completions without the board type knowing
/// anything about search strategy.
pub trait Solve {
    /// Returns a lazy iterator over every completion of this board.
    ///
    /// Solutions come out in depth-first lexicographic order: the row-major
    /// first blank cell is always filled with its smallest feasible value
    /// before larger ones are tried. Each call starts an independent, fresh
    /// search; the iterator holds no external resources, so it can be
    /// dropped at any point.
    fn solutions(&self) -> Solutions;

    /// Returns true if this board admits more than one completion.
    ///
    /// Pulls at most two solutions from [`solutions`](Self::solutions), so
    /// the cost is bounded by the effort of finding the second solution (or
    /// proving there is none), never by the total solution count.
    #[must_use]
    fn has_multiple_solutions(&self) -> bool {
        self.solutions().take(2).count() > 1
    }
}

impl Solve for Board {
    fn solutions(&self) -> Solutions {
        Solutions::new(self.clone())
    }
}

/// One branch point of the search: a board, the blank cell being filled,
/// and the candidates not yet tried there, in ascending order.
#[derive(Debug)]
struct Frame {
    board: Board,
    index: Index,
    candidates: std::vec::IntoIter<u8>,
}

/// Lazy depth-first iterator over the completions of a board.
///
/// The recursion of the search is flattened into an explicit stack of
/// [`Frame`]s, one per blank cell along the current branch, so the state
/// machine suspends cleanly between pulls. Stack depth is bounded by the
/// number of cells.
#[derive(Debug)]
pub struct Solutions {
    stack: Vec<Frame>,
    /// A fully filled board found by the last descent, handed out on the
    /// next pull.
    pending: Option<Board>,
}

impl Solutions {
    fn new(board: Board) -> Self {
        let mut search = Self {
            stack: Vec::new(),
            pending: None,
        };
        search.descend(board);
        search
    }

    /// Advances to `board`: either parks it as a found solution or pushes a
    /// frame for its first blank cell.
    fn descend(&mut self, board: Board) {
        match first_blank(&board) {
            None => {
                // Every assignment along the branch passed candidate
                // filtering, so this re-check is expected to always hold;
                // it stays as a final guard against hand-built boards.
                self.pending = board.is_solved().then_some(board);
            }
            Some(index) => {
                let candidates = board.possible_values(index).into_iter();
                self.stack.push(Frame {
                    board,
                    index,
                    candidates,
                });
            }
        }
    }
}

impl Iterator for Solutions {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        loop {
            if let Some(solution) = self.pending.take() {
                return Some(solution);
            }
            let next = {
                let frame = self.stack.last_mut()?;
                frame
                    .candidates
                    .next()
                    .map(|value| frame.board.set(frame.index, Some(value)))
            };
            match next {
                Some(board) => self.descend(board),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

fn first_blank(board: &Board) -> Option<Index> {
    board.indices().find(|&index| board.get(index).is_none())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    const SOLVED: &str = "
        435 269 781
        682 571 493
        197 834 562

        826 195 347
        374 682 915
        951 743 628

        519 326 874
        248 957 136
        763 418 259
    ";

    fn solved_board() -> Board {
        Board::from_str(SOLVED).unwrap()
    }

    #[test]
    fn test_complete_board_yields_itself_once() {
        let board = solved_board();
        let solutions: Vec<_> = board.solutions().collect();
        assert_eq!(solutions, vec![board]);
    }

    #[test]
    fn test_single_blank_restores_original_value() {
        let board = solved_board();
        for index in [Index::new(0, 0), Index::new(4, 4), Index::new(8, 8)] {
            let original = board.get(index);
            let punched = board.set(index, None);
            let solutions: Vec<_> = punched.solutions().collect();
            assert_eq!(solutions.len(), 1, "cell {index}");
            assert_eq!(solutions[0].get(index), original);
            assert_eq!(solutions[0], board);
        }
    }

    #[test]
    fn test_unsatisfiable_board_yields_nothing() {
        // (0, 3) sees 1, 2, 3 in its row and 4 in its column, leaving no
        // candidate at all.
        let board: Board = "123_ ___4 ____ ____".parse().unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.solutions().count(), 0);
        assert!(!board.has_multiple_solutions());
    }

    #[test]
    fn test_empty_4x4_enumeration() {
        let board = Board::new(4).unwrap();
        let first = board.solutions().next().unwrap();
        assert!(first.is_solved());
        // Lexicographically smallest completion comes first.
        assert_eq!(first, "1234 3412 2143 4321".parse().unwrap());
        // Total number of 4×4 grids.
        assert_eq!(board.solutions().count(), 288);
    }

    #[test]
    fn test_empty_standard_board_finds_a_solution() {
        let first = Board::standard().solutions().next().unwrap();
        assert!(first.is_solved());
    }

    #[test]
    fn test_solutions_are_independent_searches() {
        let board = solved_board().set(Index::new(0, 0), None);
        let a: Vec<_> = board.solutions().collect();
        let b: Vec<_> = board.solutions().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_has_multiple_solutions() {
        let board = solved_board();
        assert!(!board.has_multiple_solutions());

        // A single blank is forced by its row.
        assert!(!board.set(Index::new(0, 0), None).has_multiple_solutions());

        // Blanking an unavoidable rectangle (values 5/2 and 2/5 at rows
        // 0-1, columns 2-3, spanning two chunks) admits exactly two
        // completions.
        let rectangle = board
            .set(Index::new(0, 2), None)
            .set(Index::new(0, 3), None)
            .set(Index::new(1, 2), None)
            .set(Index::new(1, 3), None);
        assert!(rectangle.has_multiple_solutions());
        assert_eq!(rectangle.solutions().count(), 2);
    }
}
