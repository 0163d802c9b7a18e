//! Error types for the search crate.

use thiserror::Error;

/// Errors produced by Memetic Tabu Search runs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MtsError {
    /// A configuration field fails validation; rejected before any
    /// search work starts.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Quantum initialization was requested but no sampler was attached.
    #[error("quantum initialization requested but no sampler is configured")]
    SamplerNotConfigured,

    /// A core operation failed (malformed sequence input).
    #[error(transparent)]
    Core(#[from] merit_core::CoreError),
}

/// Result type for search operations.
pub type MtsResult<T> = Result<T, MtsError>;
