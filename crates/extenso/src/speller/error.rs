//! Error types for number spelling.

use thiserror::Error;

/// An input the speller refuses to spell.
///
/// Both variants are detected before any words are produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    /// The input was below zero.
    #[error("negative numbers are not allowed: {number}")]
    NegativeNotAllowed { number: i128 },

    /// The input exceeded the speller's ceiling.
    #[error("number {number} is too large, the largest accepted value is {ceiling}")]
    NumberTooLarge { number: i128, ceiling: i128 },
}
