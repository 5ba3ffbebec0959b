//! Candidate value derivation.
//!
//! For any cell, the candidates are the values in `1..=size` not already
//! used by the cell's row, column, or chunk. This single derivation serves
//! two consumers: the backtracking solver branches over it, and interactive
//! callers display it as hints for a selected cell.

use crate::{Board, Index};

impl Board {
    /// Returns every value the cell at `index` could hold without
    /// contradicting the rest of the board, in ascending order.
    ///
    /// If the cell currently holds a value, candidates are computed as
    /// though it were blank, so the stored value competes on equal footing
    /// and appears in the result only if it is still consistent with its
    /// peers. The ascending order is part of the contract: it fixes the
    /// enumeration order of the solution search.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Board, Index};
    ///
    /// let board = Board::new(4)?
    ///     .set(Index::new(0, 0), Some(1))
    ///     .set(Index::new(1, 1), Some(2))
    ///     .set(Index::new(0, 3), Some(3));
    ///
    /// // (0, 1) shares a row with 1 and 3, and a chunk with 1 and 2.
    /// assert_eq!(board.possible_values(Index::new(0, 1)), vec![4]);
    ///
    /// // A filled cell reconsiders its own value.
    /// assert_eq!(board.possible_values(Index::new(0, 0)), vec![1, 4]);
    /// # Ok::<(), gridoku_core::InvalidSizeError>(())
    /// ```
    #[must_use]
    pub fn possible_values(&self, index: Index) -> Vec<u8> {
        if self.get(index).is_some() {
            return self.set(index, None).possible_values(index);
        }
        let chunk = self.chunk_index_of(index);
        (1..=self.size())
            .filter(|&value| {
                let value = Some(value);
                !self.row_cells(index.row).any(|cell| cell == value)
                    && !self.col_cells(index.col).any(|cell| cell == value)
                    && !self.chunk_cells(chunk).any(|cell| cell == value)
            })
            .collect()
    }
}
