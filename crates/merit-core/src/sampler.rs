//! Sampler capability consumed by the search core.
//!
//! The search never looks inside the quantum backend: it hands over a
//! [`SampleRequest`] and receives a distribution of observed ±1
//! sequences. Keeping the seam this narrow lets correctness tests swap
//! in a deterministic stub for the statevector backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sequence::Sequence;

/// Backend parameters that stay fixed across an experiment.
///
/// Combined with a sequence length and a per-run seed these form a
/// [`SampleRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerSettings {
    /// Number of Trotter slices in the evolution circuit.
    pub trotter_steps: usize,
    /// Total evolution time t.
    pub evolution_time: f64,
    /// Number of measurement shots to draw.
    pub shots: u64,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            trotter_steps: 3,
            evolution_time: 1.0,
            shots: 1024,
        }
    }
}

impl SamplerSettings {
    /// Build the request for one sampling invocation.
    pub fn request(&self, n: usize, seed: u64) -> SampleRequest {
        SampleRequest {
            n,
            trotter_steps: self.trotter_steps,
            evolution_time: self.evolution_time,
            shots: self.shots,
            seed,
        }
    }
}

/// Parameters of a single sampling invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRequest {
    /// Sequence length (number of qubits).
    pub n: usize,
    /// Number of Trotter slices in the evolution circuit.
    pub trotter_steps: usize,
    /// Total evolution time t.
    pub evolution_time: f64,
    /// Number of measurement shots to draw.
    pub shots: u64,
    /// Seed for the measurement sampling; the same request must yield
    /// the same distribution.
    pub seed: u64,
}

/// Observed counts per candidate sequence.
///
/// Backed by a `BTreeMap` so iteration order is deterministic; the
/// search seeds its population from this iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleDistribution {
    counts: BTreeMap<Sequence, u64>,
}

impl SampleDistribution {
    /// An empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `seq`, accumulating with any prior
    /// observations of the same sequence.
    pub fn record(&mut self, seq: Sequence, count: u64) {
        *self.counts.entry(seq).or_insert(0) += count;
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct sequences observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (sequence, count) in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = (&Sequence, u64)> {
        self.counts.iter().map(|(seq, &c)| (seq, c))
    }

    /// The most frequently observed sequence, ties resolved to the
    /// lexicographically smallest.
    pub fn mode(&self) -> Option<(&Sequence, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(seq, &c)| (seq, c))
    }
}

impl FromIterator<(Sequence, u64)> for SampleDistribution {
    fn from_iter<T: IntoIterator<Item = (Sequence, u64)>>(iter: T) -> Self {
        let mut dist = Self::new();
        for (seq, count) in iter {
            dist.record(seq, count);
        }
        dist
    }
}

/// Errors surfaced by a sampler backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SamplerError {
    /// The backend cannot be reached or is not configured.
    #[error("sampler unavailable: {0}")]
    Unavailable(String),

    /// The backend ran but failed internally.
    #[error("sampler backend error: {0}")]
    Backend(String),

    /// The request or the backend's output violates the contract.
    #[error("malformed sampler input/output: {0}")]
    Malformed(String),
}

/// A source of candidate-sequence distributions.
///
/// Implementations must be deterministic in the request: identical
/// requests (including the seed) yield identical distributions.
pub trait Sampler {
    /// Draw `request.shots` candidate sequences of length `request.n`.
    fn sample(&self, request: &SampleRequest) -> Result<SampleDistribution, SamplerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    #[test]
    fn record_accumulates() {
        let mut dist = SampleDistribution::new();
        dist.record(seq("+-+-"), 3);
        dist.record(seq("+-+-"), 2);
        dist.record(seq("----"), 1);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.total(), 6);
    }

    #[test]
    fn mode_breaks_ties_lexicographically() {
        let dist: SampleDistribution =
            [(seq("++++"), 5), (seq("-+-+"), 5), (seq("+-+-"), 2)]
                .into_iter()
                .collect();
        let (mode, count) = dist.mode().unwrap();
        assert_eq!(count, 5);
        // "-+-+" sorts before "++++" ('-' < '+' in spin order -1 < 1).
        assert_eq!(mode, &seq("-+-+"));
    }

    #[test]
    fn iteration_is_ordered() {
        let dist: SampleDistribution = [(seq("++"), 1), (seq("--"), 1), (seq("-+"), 1)]
            .into_iter()
            .collect();
        let order: Vec<String> = dist.iter().map(|(s, _)| s.to_string()).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }
}
