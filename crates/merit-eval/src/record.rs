//! Per-run experiment records.

use serde::{Deserialize, Serialize};

use merit_core::Sequence;
use merit_mts::{InitKind, InitStrategy};

/// The outcome of one (n, seed, init) cell of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Sequence length.
    pub n: usize,
    /// Run seed.
    pub seed: u64,
    /// Initialization strategy requested by the sweep.
    pub init: InitStrategy,
    /// Initialization actually used (differs from `init` only when the
    /// sampler fell back).
    pub init_used: InitKind,
    /// Best energy found.
    pub best_energy: u64,
    /// Best sequence found.
    pub best_sequence: Sequence,
    /// Merit factor of the best sequence.
    pub merit_factor: f64,
    /// Wall-clock duration of the run in seconds.
    pub runtime_seconds: f64,
    /// Energy-function evaluations spent.
    pub evaluations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_flat_fields() {
        let record = ExperimentRecord {
            n: 6,
            seed: 42,
            init: InitStrategy::Quantum,
            init_used: InitKind::RandomFallback,
            best_energy: 7,
            best_sequence: "++-+-+".parse().unwrap(),
            merit_factor: 36.0 / 14.0,
            runtime_seconds: 0.25,
            evaluations: 1234,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"init\":\"quantum\""));
        assert!(json.contains("\"init_used\":\"random_fallback\""));
        assert!(json.contains("\"best_sequence\":\"++-+-+\""));

        let back: ExperimentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
