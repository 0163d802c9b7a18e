//! Error types for the experiment driver.

use thiserror::Error;

/// Errors produced while driving an experiment sweep.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvalError {
    /// The experiment configuration is unusable; rejected before any
    /// run starts.
    #[error("invalid experiment configuration: {0}")]
    InvalidConfig(String),

    /// A search run failed.
    #[error(transparent)]
    Mts(#[from] merit_mts::MtsError),

    /// Report serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for experiment operations.
pub type EvalResult<T> = Result<T, EvalError>;
