//! Immutable Sudoku board representation.

use derive_more::{Display, Error};

use crate::Index;

/// Error returned when a board is constructed with an invalid side length.
///
/// A board side must be the square of a positive integer (1, 4, 9, 16, ...),
/// so that the grid divides evenly into `chunk_size × chunk_size` chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("board size must be the square of a positive integer, got {size}")]
pub struct InvalidSizeError {
    /// The rejected side length.
    pub size: usize,
}

/// A square grid of optional values, with value semantics.
///
/// A board of side `size` maps every coordinate in `[0, size) × [0, size)` to
/// either a value in `1..=size` or a blank. The side must be a perfect square
/// so that the grid decomposes into `chunk_size × chunk_size` sub-squares
/// ("chunks"), where `chunk_size = size.isqrt()`.
///
/// Boards are immutable: every mutating-looking operation returns a new
/// board and never changes the receiver. This makes sharing a board between
/// readers always safe, and it is what lets the solution enumerator keep
/// many in-flight boards on its stack without aliasing concerns.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Board, Index};
///
/// let board = Board::standard();
/// let board = board.set(Index::new(0, 0), Some(5));
/// assert_eq!(board.get(Index::new(0, 0)), Some(5));
/// assert_eq!(board.get(Index::new(0, 1)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    chunk_size: u8,
    cells: Vec<Option<u8>>,
}

impl Board {
    /// The side length of a standard board.
    pub const STANDARD_SIZE: u8 = 9;

    /// Creates a blank board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] unless `size` is the square of a positive
    /// integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::Board;
    ///
    /// assert!(Board::new(9).is_ok());
    /// assert!(Board::new(4).is_ok());
    /// assert!(Board::new(6).is_err());
    /// assert!(Board::new(0).is_err());
    /// ```
    pub fn new(size: u8) -> Result<Self, InvalidSizeError> {
        let chunk_size = size.isqrt();
        if chunk_size == 0 || chunk_size * chunk_size != size {
            return Err(InvalidSizeError {
                size: usize::from(size),
            });
        }
        Ok(Self {
            size,
            chunk_size,
            cells: vec![None; usize::from(size) * usize::from(size)],
        })
    }

    /// Creates a blank board with the standard 9×9 side length.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            size: Self::STANDARD_SIZE,
            chunk_size: 3,
            cells: vec![None; 81],
        }
    }

    /// Creates a board from rows of raw values, with `0` meaning blank.
    ///
    /// The side length is taken from the number of rows. This is the bulk
    /// loading path used to install fixed reference grids.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if the number of rows is not a valid
    /// board side.
    ///
    /// # Panics
    ///
    /// Panics if any row does not contain exactly as many values as there
    /// are rows.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, InvalidSizeError>
    where
        R: AsRef<[u8]>,
    {
        let size = u8::try_from(rows.len()).map_err(|_| InvalidSizeError { size: rows.len() })?;
        let mut board = Self::new(size)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            assert_eq!(
                values.len(),
                usize::from(size),
                "row {row} must contain exactly {size} values"
            );
            for (col, &value) in values.iter().enumerate() {
                board.cells[row * usize::from(size) + col] = (value != 0).then_some(value);
            }
        }
        Ok(board)
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the side length of a chunk (3 for a 9×9 board).
    #[must_use]
    pub const fn chunk_size(&self) -> u8 {
        self.chunk_size
    }

    /// Returns the number of chunks along one side.
    ///
    /// Because the chunk side is the square root of the board side, this is
    /// the same number as [`chunk_size`](Self::chunk_size).
    #[must_use]
    pub const fn num_chunks(&self) -> u8 {
        self.chunk_size
    }

    fn cell_offset(&self, index: Index) -> usize {
        usize::from(index.row) * usize::from(self.size) + usize::from(index.col)
    }

    /// Returns the value at `index`, or `None` for a blank cell.
    ///
    /// Both coordinates of `index` must be in `[0, size)`; out-of-range
    /// coordinates are a caller contract violation.
    #[must_use]
    pub fn get(&self, index: Index) -> Option<u8> {
        self.cells[self.cell_offset(index)]
    }

    /// Returns a new board with the cell at `index` set to `value`.
    ///
    /// Passing `None` blanks the cell. The receiver is never modified.
    ///
    /// The value is not validated against `1..=size`: storing an
    /// out-of-range value is accepted, but it will never satisfy group
    /// completeness and never appear among candidate values, so it silently
    /// degrades downstream checks. Staying within `1..=size` is an unchecked
    /// precondition of the normal API contract.
    #[must_use]
    pub fn set(&self, index: Index, value: Option<u8>) -> Self {
        let mut next = self.clone();
        let offset = self.cell_offset(index);
        next.cells[offset] = value;
        next
    }

    /// Returns an iterator over every coordinate in row-major order.
    ///
    /// Each call yields an independent, restartable sequence; iterating
    /// never touches the board itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Board, Index};
    ///
    /// let board = Board::new(4)?;
    /// let mut indices = board.indices();
    /// assert_eq!(indices.next(), Some(Index::new(0, 0)));
    /// assert_eq!(indices.next(), Some(Index::new(0, 1)));
    /// assert_eq!(board.indices().count(), 16);
    /// # Ok::<(), gridoku_core::InvalidSizeError>(())
    /// ```
    pub fn indices(&self) -> impl Iterator<Item = Index> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Index::new(row, col)))
    }

    /// Returns the values along one row.
    pub(crate) fn row_cells(&self, row: u8) -> impl Iterator<Item = Option<u8>> + '_ {
        (0..self.size).map(move |col| self.get(Index::new(row, col)))
    }

    /// Returns the values along one column.
    pub(crate) fn col_cells(&self, col: u8) -> impl Iterator<Item = Option<u8>> + '_ {
        (0..self.size).map(move |row| self.get(Index::new(row, col)))
    }

    /// Returns the values of the chunk at the given chunk coordinate,
    /// row-major within the chunk.
    pub(crate) fn chunk_cells(&self, chunk: Index) -> impl Iterator<Item = Option<u8>> + '_ {
        let top = chunk.row * self.chunk_size;
        let left = chunk.col * self.chunk_size;
        (0..self.chunk_size).flat_map(move |dr| {
            (0..self.chunk_size).map(move |dc| self.get(Index::new(top + dr, left + dc)))
        })
    }

    /// Maps a cell coordinate to the `(chunk_row, chunk_col)` coordinate of
    /// the chunk containing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Board, Index};
    ///
    /// let board = Board::standard();
    /// assert_eq!(board.chunk_index_of(Index::new(4, 8)), Index::new(1, 2));
    /// ```
    #[must_use]
    pub fn chunk_index_of(&self, index: Index) -> Index {
        Index::new(index.row / self.chunk_size, index.col / self.chunk_size)
    }

    /// Returns true if the two cells share a row, a column, or a chunk.
    ///
    /// This is the peer relation: two adjacent cells constrain each other's
    /// values, and presentation layers use the same relation to highlight
    /// related cells.
    #[must_use]
    pub fn are_adjacent(&self, a: Index, b: Index) -> bool {
        a.row == b.row || a.col == b.col || self.chunk_index_of(a) == self.chunk_index_of(b)
    }

    /// Returns true if every chunk contains every value in `1..=size`.
    ///
    /// Only chunk groups are inspected. A value duplicated along a row or
    /// column, without repeating inside any single chunk, is not detected;
    /// callers needing full row and column validation must rely on candidate
    /// filtering during construction instead. Boards built exclusively
    /// through [`possible_values`](Self::possible_values)-guided assignment
    /// can never reach such a state.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        for chunk_row in 0..self.num_chunks() {
            for chunk_col in 0..self.num_chunks() {
                let chunk: Vec<_> = self
                    .chunk_cells(Index::new(chunk_row, chunk_col))
                    .collect();
                if !self.is_group_complete(&chunk) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns true if the group contains every value in `1..=size`.
    ///
    /// Completeness is checked by presence, so a group that somehow holds
    /// duplicates alongside all required values still passes; duplicates
    /// cannot arise through candidate-guided assignment.
    fn is_group_complete(&self, group: &[Option<u8>]) -> bool {
        assert_eq!(
            group.len(),
            usize::from(self.size),
            "group must contain exactly {} values",
            self.size
        );
        (1..=self.size).all(|value| group.contains(&Some(value)))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use proptest::prelude::*;

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
    fn test_new_standard_sizes() {
        for size in [1, 4, 9, 16, 25] {
            let board = Board::new(size).unwrap();
            assert_eq!(board.size(), size);
            assert_eq!(board.chunk_size(), size.isqrt());
            assert!(board.indices().all(|index| board.get(index).is_none()));
        }
        for size in [0, 2, 3, 6, 8, 10, 15] {
            assert_eq!(
                Board::new(size),
                Err(InvalidSizeError {
                    size: usize::from(size)
                })
            );
        }
    }

    proptest! {
        #[test]
        fn test_new_accepts_exactly_perfect_squares(size: u8) {
            let chunk = size.isqrt();
            let expect_ok = chunk >= 1 && chunk * chunk == size;
            prop_assert_eq!(Board::new(size).is_ok(), expect_ok);
        }
    }

    #[test]
    fn test_set_is_copy_on_write() {
        let blank = Board::standard();
        let index = Index::new(4, 4);
        let filled = blank.set(index, Some(7));
        assert_eq!(blank.get(index), None);
        assert_eq!(filled.get(index), Some(7));

        let cleared = filled.set(index, None);
        assert_eq!(filled.get(index), Some(7));
        assert_eq!(cleared.get(index), None);
    }

    #[test]
    fn test_indices_row_major_and_restartable() {
        let board = Board::new(4).unwrap();
        let first: Vec<_> = board.indices().collect();
        let second: Vec<_> = board.indices().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 16);
        assert_eq!(first[0], Index::new(0, 0));
        assert_eq!(first[3], Index::new(0, 3));
        assert_eq!(first[4], Index::new(1, 0));
        assert_eq!(first[15], Index::new(3, 3));
        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(first, sorted);
    }

    #[test]
    fn test_from_rows_installs_values() {
        let board = Board::from_rows(&[
            [1, 2, 3, 4],
            [3, 4, 1, 2],
            [0, 0, 0, 0],
            [4, 3, 2, 1],
        ])
        .unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.get(Index::new(0, 0)), Some(1));
        assert_eq!(board.get(Index::new(2, 2)), None);
        assert_eq!(board.get(Index::new(3, 0)), Some(4));
    }

    #[test]
    fn test_from_rows_rejects_bad_side() {
        assert!(Board::from_rows(&[[1u8, 2], [2, 1]]).is_err());
    }

    #[test]
    fn test_chunk_index_of() {
        let board = Board::standard();
        assert_eq!(board.chunk_index_of(Index::new(0, 0)), Index::new(0, 0));
        assert_eq!(board.chunk_index_of(Index::new(2, 2)), Index::new(0, 0));
        assert_eq!(board.chunk_index_of(Index::new(3, 2)), Index::new(1, 0));
        assert_eq!(board.chunk_index_of(Index::new(8, 8)), Index::new(2, 2));
    }

    #[test]
    fn test_are_adjacent() {
        let board = Board::standard();
        // Same row, same column, same chunk.
        assert!(board.are_adjacent(Index::new(0, 0), Index::new(0, 8)));
        assert!(board.are_adjacent(Index::new(0, 0), Index::new(8, 0)));
        assert!(board.are_adjacent(Index::new(0, 0), Index::new(2, 2)));
        // Different row, column, and chunk.
        assert!(!board.are_adjacent(Index::new(0, 0), Index::new(3, 3)));
        assert!(!board.are_adjacent(Index::new(1, 4), Index::new(4, 1)));
    }

    #[test]
    fn test_is_solved_on_complete_board() {
        assert!(solved_board().is_solved());
    }

    #[test]
    fn test_is_solved_false_with_blank() {
        let board = solved_board().set(Index::new(0, 0), None);
        assert!(!board.is_solved());
    }

    #[test]
    fn test_is_solved_detects_chunk_duplicate() {
        // (0, 0) holds 4; overwriting it with 3 (already at (0, 1), same
        // chunk) leaves the chunk without a 4.
        let board = solved_board().set(Index::new(0, 0), Some(3));
        assert!(!board.is_solved());
    }

    #[test]
    fn test_is_solved_ignores_row_and_column_duplicates() {
        // Swap two values inside the top-left chunk. Every chunk still
        // contains 1..=9, but rows 0 and 1 now both hold duplicates.
        let board = solved_board();
        let a = Index::new(0, 0); // 4
        let b = Index::new(1, 0); // 6
        let swapped = board.set(a, board.get(b)).set(b, board.get(a));
        assert_eq!(swapped.get(a), Some(6));
        assert_eq!(swapped.get(b), Some(4));
        assert!(swapped.is_solved());
    }

    #[test]
    fn test_is_solved_blank_board() {
        assert!(!Board::standard().is_solved());
        // The degenerate 1×1 board is solved by its single value.
        let unit = Board::new(1).unwrap().set(Index::new(0, 0), Some(1));
        assert!(unit.is_solved());
    }
}
