//! Board text representation.
//!
//! Boards render and parse as one character per cell: digits for values and
//! `_` (or `.` on input) for blanks. Whitespace is insignificant on input,
//! which keeps grid fixtures in tests readable. This representation covers
//! sides up to 9; larger boards would need multi-character cells.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{Board, Index, InvalidSizeError};

/// Error returned when parsing a board from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The cell count is not a perfect square, so no board side matches it.
    #[display("cannot form a square board from {cells} cells")]
    InvalidLength {
        /// Number of non-whitespace cells found.
        cells: usize,
    },
    /// The implied side length is not a valid board side.
    #[display("{_0}")]
    InvalidSize(InvalidSizeError),
    /// A character was neither a digit, a blank marker, nor whitespace.
    #[display("invalid character {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// A digit exceeded the board side.
    #[display("value {value} out of range for a board of side {size}")]
    ValueOutOfRange {
        /// The parsed value.
        value: u8,
        /// The board side implied by the cell count.
        size: u8,
    },
}

impl From<InvalidSizeError> for ParseBoardError {
    fn from(err: InvalidSizeError) -> Self {
        Self::InvalidSize(err)
    }
}

impl fmt::Display for Board {
    /// Renders one row per line, with a space between chunk-column groups
    /// and `_` for blanks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size() {
                if col > 0 && col % self.chunk_size() == 0 {
                    write!(f, " ")?;
                }
                match self.get(Index::new(row, col)) {
                    Some(value @ 1..=9) => write!(f, "{value}")?,
                    Some(_) => write!(f, "?")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from one character per cell, row-major.
    ///
    /// Digits `1..=9` are values, `_` and `.` are blanks, and whitespace is
    /// ignored. The side length is inferred from the cell count.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Board, Index};
    ///
    /// let board: Board = "12.. ..3. .... ...4".parse()?;
    /// assert_eq!(board.size(), 4);
    /// assert_eq!(board.get(Index::new(0, 1)), Some(2));
    /// assert_eq!(board.get(Index::new(0, 2)), None);
    /// # Ok::<(), gridoku_core::ParseBoardError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let value = match character {
                '_' | '.' => None,
                '1'..='9' => {
                    // A single ASCII digit always converts.
                    let byte = u8::try_from(character)
                        .map_err(|_| ParseBoardError::InvalidCharacter { character })?;
                    Some(byte - b'0')
                }
                _ => return Err(ParseBoardError::InvalidCharacter { character }),
            };
            values.push(value);
        }

        let side = values.len().isqrt();
        if side * side != values.len() {
            return Err(ParseBoardError::InvalidLength {
                cells: values.len(),
            });
        }
        let side = u8::try_from(side).map_err(|_| InvalidSizeError { size: side })?;
        let mut board = Board::new(side)?;
        for (cell, value) in board.indices().zip(values) {
            if let Some(value) = value {
                if value > side {
                    return Err(ParseBoardError::ValueOutOfRange { value, size: side });
                }
                board = board.set(cell, Some(value));
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let board = Board::standard()
            .set(Index::new(0, 0), Some(5))
            .set(Index::new(8, 8), Some(9));
        let text = board.to_string();
        let parsed: Board = text.parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_display_layout() {
        let board = Board::new(4)
            .unwrap()
            .set(Index::new(0, 0), Some(1))
            .set(Index::new(0, 3), Some(4));
        assert_eq!(board.to_string(), "1_ _4\n__ __\n__ __\n__ __");
    }

    #[test]
    fn test_parse_whitespace_and_dots() {
        let board: Board = "1 2 3 4\n. . . .\n_ _ _ _\n4 3 2 1".parse().unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.get(Index::new(3, 0)), Some(4));
        assert_eq!(board.get(Index::new(1, 0)), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "123".parse::<Board>(),
            Err(ParseBoardError::InvalidLength { cells: 3 })
        );
        assert_eq!(
            "1x.. .... .... ....".parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter { character: 'x' })
        );
        assert_eq!(
            "5... .... .... ....".parse::<Board>(),
            Err(ParseBoardError::ValueOutOfRange { value: 5, size: 4 })
        );
    }
}
