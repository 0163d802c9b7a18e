//! `merit-sim` — the quantum sampler backend.
//!
//! Produces seed populations for the search core by simulating a fixed
//! Trotterized evolution under the LABS cost Hamiltonian:
//!
//! 1. [`Hamiltonian::labs`] builds the sum of 2-body and 4-body Z-string
//!    terms over consecutive indices.
//! 2. [`TrotterCircuit`] synthesises H-layer + cost/mixer slices into a
//!    small gate-list [`Circuit`].
//! 3. [`Statevector`] evolves the dense state and draws seeded shots.
//! 4. [`TrotterSampler`] packages the above behind the
//!    [`merit_core::Sampler`] capability trait.
//!
//! # Quick start
//!
//! ```rust
//! use merit_core::{SampleRequest, Sampler};
//! use merit_sim::TrotterSampler;
//!
//! let request = SampleRequest {
//!     n: 6,
//!     trotter_steps: 3,
//!     evolution_time: 0.9,
//!     shots: 512,
//!     seed: 7,
//! };
//! let distribution = TrotterSampler::new().sample(&request).unwrap();
//! assert_eq!(distribution.total(), 512);
//! ```

pub mod circuit;
pub mod error;
pub mod hamiltonian;
pub mod sampler;
pub mod statevector;
pub mod trotter;

pub use circuit::{Circuit, Gate};
pub use error::{SimError, SimResult};
pub use hamiltonian::{Hamiltonian, ZTerm};
pub use sampler::TrotterSampler;
pub use statevector::{MAX_QUBITS, Statevector};
pub use trotter::TrotterCircuit;
