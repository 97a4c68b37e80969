//! # Seed Error Types
//!
//! The generator itself is total. The only fallible step is turning
//! caller-supplied text into a [`Seed`](crate::Seed).

use thiserror::Error;

/// Errors that can occur while parsing a seed from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The input had no digits at all.
    #[error("seed is empty")]
    Empty,

    /// A character other than a decimal digit was found.
    #[error("invalid character {found:?} at position {position} in seed")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Byte offset of the character in the trimmed input.
        position: usize,
    },
}

/// Result type for seed parsing.
pub type SeedResult<T> = Result<T, SeedError>;
