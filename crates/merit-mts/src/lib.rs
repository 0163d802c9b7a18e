//! `merit-mts` — Memetic Tabu Search over ±1 sequences.
//!
//! A population of candidate sequences is refined by tabu-constrained
//! single-flip local search and recombined with one-point crossover;
//! offspring replace weaker members. The initial population comes from
//! uniform random draws or from a quantum sampler's output distribution
//! (any [`merit_core::Sampler`] implementation; the search never looks
//! behind that trait).
//!
//! Runs are fully deterministic in (length, seed, configuration): one
//! seeded `SmallRng` drives every stochastic choice and move tie-breaks
//! are resolved by scan order.
//!
//! # Quick start
//!
//! ```rust
//! use merit_mts::{MemeticTabuSearch, MtsConfig};
//!
//! let config = MtsConfig { mts_steps: 30, ..Default::default() };
//! let outcome = MemeticTabuSearch::new(config).run(8, 42).unwrap();
//! assert_eq!(outcome.history.len(), 30);
//! ```

pub mod config;
pub mod error;
pub mod operators;
pub mod population;
pub mod search;
pub mod tabu;

pub use config::{InitStrategy, MtsConfig, ParentSelection};
pub use error::{MtsError, MtsResult};
pub use population::{Individual, Population};
pub use search::{InitKind, MemeticTabuSearch, MtsOutcome};
pub use tabu::TabuList;
