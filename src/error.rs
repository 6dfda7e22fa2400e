use std::fmt;

use crate::ALPHABET;

/// Errors that can occur when decoding ULID strings.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Error {
    /// The input does not have the required length.
    ///
    /// Strings are measured in characters, byte slices in bytes.
    InvalidLength {
        /// Length required.
        expected: usize,
        /// Length found.
        found: usize,
    },
    /// The string contains a character outside the canonical alphabet.
    InvalidCharacter {
        /// Character index of the first offending character.
        position: usize,
    },
    /// The timestamp does not fit into 48 bits.
    TimestampOverflow,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    /// Formats the error message for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidLength { expected, found } => {
                write!(f, "invalid length {found}, expected exactly {expected}")
            }
            Self::InvalidCharacter { position } => {
                write!(
                    f,
                    "invalid character at position {position}, only characters in {ALPHABET} are allowed"
                )
            }
            Self::TimestampOverflow => write!(f, "timestamp is too large and overflows 48 bits"),
        }
    }
}
