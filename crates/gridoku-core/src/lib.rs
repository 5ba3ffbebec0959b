//! Core data structures for the Gridoku Sudoku engine.
//!
//! This crate provides the immutable board value type and the constraint
//! queries built on top of it. Everything here is pure and synchronous:
//! boards are copy-on-write values, so any number of readers can share one
//! safely, and every "mutation" returns a fresh board.
//!
//! # Overview
//!
//! - [`Index`]: a zero-based `(row, column)` coordinate.
//! - [`Board`]: a square grid of optional values in `1..=size`, where the
//!   side length must be a perfect square so that the grid decomposes into
//!   chunks (the 3×3 boxes of a standard board).
//! - Candidate derivation ([`Board::possible_values`]): the ascending list
//!   of values a cell can hold without clashing with its row, column, or
//!   chunk. The solver branches over exactly this list.
//! - Text representation ([`Board`]'s `Display`/`FromStr`): compact
//!   one-character-per-cell grids used by fixtures and CLI output.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Board, Index};
//!
//! let board = Board::standard().set(Index::new(0, 0), Some(4));
//! assert_eq!(board.get(Index::new(0, 0)), Some(4));
//! assert!(!board.possible_values(Index::new(0, 1)).contains(&4));
//! ```

pub mod board;
pub mod candidates;
pub mod index;
pub mod parse;

pub use self::{
    board::{Board, InvalidSizeError},
    index::Index,
    parse::ParseBoardError,
};
