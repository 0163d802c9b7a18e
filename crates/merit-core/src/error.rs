//! Error types for the core crate.

use thiserror::Error;

/// Errors produced by sequence construction and the core kernels.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A spin value outside the ±1 alphabet was supplied.
    #[error("spin at position {pos} is {value}, expected +1 or -1")]
    InvalidSpin {
        /// Position of the offending element.
        pos: usize,
        /// The value found there.
        value: i8,
    },

    /// The sequence has no elements.
    #[error("sequence must contain at least one spin")]
    Empty,

    /// Two sequences that must agree in length do not.
    #[error("sequence length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// The length is too short for the requested interaction structure.
    #[error("length {n} is below the minimum of {min} required for 4-body terms")]
    TooShort {
        /// Supplied length.
        n: usize,
        /// Minimum admissible length.
        min: usize,
    },

    /// The length is beyond the exhaustive-search limit.
    #[error("length {n} exceeds the brute-force limit of {max}")]
    TooLong {
        /// Supplied length.
        n: usize,
        /// Maximum admissible length.
        max: usize,
    },

    /// A sequence string could not be parsed.
    #[error("invalid sequence character {found:?} at position {pos}, expected '+' or '-'")]
    InvalidChar {
        /// Position of the offending character.
        pos: usize,
        /// The character found there.
        found: char,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
