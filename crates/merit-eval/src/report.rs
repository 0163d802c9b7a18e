//! Experiment report structure and per-size summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use merit_mts::InitStrategy;

use crate::ExperimentConfig;
use crate::record::ExperimentRecord;
use crate::reproducibility::ReproducibilityInfo;

/// Aggregates over all records sharing a sequence length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeSummary {
    /// Sequence length.
    pub n: usize,
    /// Lowest energy found at this length, any init.
    pub best_energy: u64,
    /// Mean best energy over random-init runs, if any ran.
    pub mean_best_random: Option<f64>,
    /// Mean best energy over quantum-init runs, if any ran.
    pub mean_best_quantum: Option<f64>,
    /// 100·(random − quantum)/random over the means. A reporting
    /// metric only; no statistical significance is implied.
    pub improvement_pct: Option<f64>,
}

/// Compute one [`SizeSummary`] per distinct length, in ascending order.
///
/// Runs are grouped by the *requested* init strategy, so fallback runs
/// count toward the quantum column they were scheduled in.
pub fn summarize(records: &[ExperimentRecord]) -> Vec<SizeSummary> {
    let mut sizes: Vec<usize> = records.iter().map(|r| r.n).collect();
    sizes.sort_unstable();
    sizes.dedup();

    sizes
        .into_iter()
        .map(|n| {
            let at_n: Vec<&ExperimentRecord> = records.iter().filter(|r| r.n == n).collect();
            let best_energy = at_n.iter().map(|r| r.best_energy).min().unwrap_or(0);
            let mean = |init: InitStrategy| {
                let energies: Vec<u64> = at_n
                    .iter()
                    .filter(|r| r.init == init)
                    .map(|r| r.best_energy)
                    .collect();
                if energies.is_empty() {
                    None
                } else {
                    Some(energies.iter().sum::<u64>() as f64 / energies.len() as f64)
                }
            };
            let mean_best_random = mean(InitStrategy::Random);
            let mean_best_quantum = mean(InitStrategy::Quantum);
            let improvement_pct = match (mean_best_random, mean_best_quantum) {
                (Some(r), Some(q)) if r > 0.0 => Some(100.0 * (r - q) / r),
                _ => None,
            };
            SizeSummary {
                n,
                best_energy,
                mean_best_random,
                mean_best_quantum,
                improvement_pct,
            }
        })
        .collect()
}

/// Complete experiment report: metadata header, every record, and the
/// per-size summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Schema version for forward compatibility.
    pub schema_version: String,
    /// When the sweep finished.
    pub timestamp: DateTime<Utc>,
    /// Experiment name.
    pub name: String,
    /// Target backend name.
    pub backend: String,
    /// The full configuration the sweep ran with.
    pub config: ExperimentConfig,
    /// One record per (n, seed, init) cell.
    pub records: Vec<ExperimentRecord>,
    /// Per-size aggregates.
    pub summary: Vec<SizeSummary>,
    /// Reproducibility information.
    pub reproducibility: ReproducibilityInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use merit_mts::InitKind;

    fn record(n: usize, init: InitStrategy, best_energy: u64) -> ExperimentRecord {
        ExperimentRecord {
            n,
            seed: 1,
            init,
            init_used: InitKind::Random,
            best_energy,
            best_sequence: merit_core::Sequence::from_spins(vec![1; n]).unwrap(),
            merit_factor: 1.0,
            runtime_seconds: 0.0,
            evaluations: 0,
        }
    }

    #[test]
    fn summary_groups_by_length() {
        let records = vec![
            record(6, InitStrategy::Random, 10),
            record(6, InitStrategy::Random, 8),
            record(6, InitStrategy::Quantum, 7),
            record(8, InitStrategy::Random, 16),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.len(), 2);

        let six = &summary[0];
        assert_eq!(six.n, 6);
        assert_eq!(six.best_energy, 7);
        assert_eq!(six.mean_best_random, Some(9.0));
        assert_eq!(six.mean_best_quantum, Some(7.0));
        let pct = six.improvement_pct.unwrap();
        assert!((pct - 100.0 * 2.0 / 9.0).abs() < 1e-12);

        let eight = &summary[1];
        assert_eq!(eight.mean_best_quantum, None);
        assert_eq!(eight.improvement_pct, None);
    }
}
