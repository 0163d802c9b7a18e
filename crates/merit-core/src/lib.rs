//! `merit-core` — LABS problem primitives.
//!
//! The Low Autocorrelation Binary Sequence (LABS) problem asks for a ±1
//! sequence of length N minimising the sidelobe energy
//!
//!   E(s) = Σ_{k=1}^{N-1} (Σ_i s_i · s_{i+k})²
//!
//! This crate holds everything the rest of the workspace agrees on: the
//! validated [`Sequence`] type, the energy kernel, the deterministic
//! interaction-index generator feeding the sampler's Hamiltonian, an
//! exhaustive ground-truth search for small N, and the [`Sampler`]
//! capability trait that decouples the search core from any quantum
//! backend.
//!
//! # Quick start
//!
//! ```rust
//! use merit_core::{Sequence, energy, merit_factor};
//!
//! let barker: Sequence = "+++++--++-+-+".parse().unwrap();
//! assert_eq!(energy(&barker), 6);
//! assert!(merit_factor(&barker) > 14.0);
//! ```

pub mod bruteforce;
pub mod energy;
pub mod error;
pub mod interactions;
pub mod sampler;
pub mod sequence;

pub use bruteforce::{BRUTE_FORCE_MAX, brute_force_minimum};
pub use energy::{autocorrelation, energy, merit_factor};
pub use error::{CoreError, CoreResult};
pub use interactions::Interactions;
pub use sampler::{SampleDistribution, SampleRequest, Sampler, SamplerError, SamplerSettings};
pub use sequence::Sequence;
