//! Error types for the sampler backend.

use thiserror::Error;

/// Errors produced by circuit synthesis and statevector simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Hamiltonian contains no terms.
    #[error("Hamiltonian has no terms to synthesise")]
    EmptyHamiltonian,

    /// n_steps must be ≥ 1.
    #[error("trotter_steps must be at least 1, got {0}")]
    InvalidSteps(usize),

    /// A gate references a qubit index that is out of range.
    #[error("gate references qubit {qubit} but circuit only has {n_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the circuit.
        n_qubits: u32,
    },

    /// CX needs two distinct qubits.
    #[error("CX control and target must differ, got qubit {0} twice")]
    ControlIsTarget(u32),

    /// The dense statevector would not fit in memory.
    #[error("{n} qubits exceed the statevector limit of {max}")]
    TooManyQubits {
        /// Requested width.
        n: usize,
        /// Maximum supported width.
        max: usize,
    },

    /// Circuit width does not match the statevector width.
    #[error("circuit has {circuit} qubits but statevector has {state}")]
    WidthMismatch {
        /// Circuit width.
        circuit: u32,
        /// Statevector width.
        state: u32,
    },

    /// Interaction generation rejected the sequence length.
    #[error(transparent)]
    Core(#[from] merit_core::CoreError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
