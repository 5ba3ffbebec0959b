//! Reproducible generation seeds.
//!
//! All randomness in generation flows from a [`PuzzleSeed`]: the same seed
//! always produces the same solved board and the same puzzle. Seeds render
//! as 64 hexadecimal characters, so a generated puzzle can be reproduced
//! from its printed seed alone.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a seed from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {length}")]
    InvalidLength {
        /// Length of the rejected input, in bytes.
        length: usize,
    },
    /// The input contained a character that is not a hex digit.
    #[display("seed must contain only hex digits")]
    InvalidDigit,
}

/// A 32-byte seed for deterministic puzzle generation.
///
/// # Examples
///
/// ```
/// use gridoku_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(seed.to_string().len(), 64);
///
/// // Seeds can also be derived from a memorable phrase.
/// let a = PuzzleSeed::from_phrase("daily puzzle 2026-08-24");
/// let b = PuzzleSeed::from_phrase("daily puzzle 2026-08-24");
/// assert_eq!(a, b);
/// # Ok::<(), gridoku_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Creates a fresh seed from the thread-local random number generator.
    ///
    /// This is the only place generation touches ambient randomness; every
    /// downstream step is a deterministic function of the seed.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Builds the deterministic generator state for this seed.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { length: s.len() });
        }
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit);
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| ParseSeedError::InvalidDigit)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseSeedError::InvalidDigit)?;
        }
        Ok(Self(bytes))
    }
}
