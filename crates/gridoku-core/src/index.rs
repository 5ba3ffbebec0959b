//! Grid coordinates.

use std::fmt::{self, Display};

/// A zero-based `(row, column)` coordinate on a board.
///
/// The top-left cell is `(0, 0)`; rows grow downward and columns grow to the
/// right. Indices carry no identity beyond their coordinates, so they are
/// plain `Copy` values and compare in row-major order.
///
/// # Examples
///
/// ```
/// use gridoku_core::Index;
///
/// let index = Index::new(2, 7);
/// assert_eq!(index.row, 2);
/// assert_eq!(index.col, 7);
/// assert!(Index::new(0, 8) < Index::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    /// Row coordinate, counted from the top.
    pub row: u8,
    /// Column coordinate, counted from the left.
    pub col: u8,
}

impl Index {
    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
