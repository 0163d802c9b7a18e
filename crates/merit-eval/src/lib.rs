//! `merit-eval` — experiment driver and reporting.
//!
//! Drives the cross product of sequence lengths, seeds, and
//! initialization strategies through the search core, one sequential
//! run per cell, and assembles a structured JSON report:
//!
//! ```text
//! [ExperimentConfig] -> Runner -> records (one per (n, seed, init))
//!                                    |
//!                                    v
//!                             per-size summary
//!                                    |
//!                                    v
//!                        ExperimentReport -> JSON output
//! ```
//!
//! # Example
//!
//! ```ignore
//! use merit_eval::{ExperimentConfig, Runner, export};
//!
//! let config = ExperimentConfig::default();
//! let report = Runner::new(config).run(&[])?;
//! println!("{}", export::to_json(&report, &Default::default())?);
//! ```

pub mod error;
pub mod export;
pub mod record;
pub mod report;
pub mod reproducibility;

pub use error::{EvalError, EvalResult};
pub use record::ExperimentRecord;
pub use report::{ExperimentReport, SizeSummary, summarize};
pub use reproducibility::ReproducibilityInfo;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use merit_core::{Sampler, SamplerSettings, merit_factor};
use merit_mts::{InitStrategy, MemeticTabuSearch, MtsConfig};

/// Version of the report schema.
pub const SCHEMA_VERSION: &str = "0.2.0";

/// Declarative description of a sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Experiment name, echoed into the report header.
    pub name: String,
    /// Target backend name, echoed into the report header.
    pub backend: String,
    /// Sequence lengths to sweep.
    pub sizes: Vec<usize>,
    /// Seeds to sweep.
    pub seeds: Vec<u64>,
    /// Initialization strategies to sweep.
    pub inits: Vec<InitStrategy>,
    /// Search configuration shared by every run (`init` is overridden
    /// per cell).
    pub mts: MtsConfig,
    /// Sampler parameters shared by every quantum-init run.
    pub sampler: SamplerSettings,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: "labs-mts".into(),
            backend: "statevector".into(),
            sizes: vec![6, 8, 10],
            seeds: vec![1, 2, 3],
            inits: vec![InitStrategy::Random, InitStrategy::Quantum],
            mts: MtsConfig::default(),
            sampler: SamplerSettings::default(),
        }
    }
}

impl ExperimentConfig {
    /// Reject unusable sweeps before any run starts.
    pub fn validate(&self) -> EvalResult<()> {
        if self.sizes.is_empty() {
            return Err(EvalError::InvalidConfig("sizes must not be empty".into()));
        }
        if self.seeds.is_empty() {
            return Err(EvalError::InvalidConfig("seeds must not be empty".into()));
        }
        if self.inits.is_empty() {
            return Err(EvalError::InvalidConfig("inits must not be empty".into()));
        }
        self.mts.validate()?;
        Ok(())
    }

    /// Total number of runs the sweep will perform.
    pub fn total_runs(&self) -> usize {
        self.sizes.len() * self.seeds.len() * self.inits.len()
    }
}

/// The sweep driver.
pub struct Runner<'a> {
    config: ExperimentConfig,
    sampler: Option<&'a dyn Sampler>,
}

impl<'a> Runner<'a> {
    /// Create a runner with the given configuration and no sampler.
    pub fn new(config: ExperimentConfig) -> Self {
        Self {
            config,
            sampler: None,
        }
    }

    /// Attach the sampler used by quantum-init cells.
    #[must_use]
    pub fn with_sampler(mut self, sampler: &'a dyn Sampler) -> Self {
        self.sampler = Some(sampler);
        self
    }

    /// Execute the full cross product and assemble the report.
    ///
    /// Runs are strictly sequential; each cell is an independent seeded
    /// invocation of the search.
    pub fn run(&self, cli_args: &[String]) -> EvalResult<ExperimentReport> {
        self.run_with_progress(cli_args, |_| {})
    }

    /// Like [`Runner::run`], invoking `on_record` after each completed
    /// cell (for progress displays).
    pub fn run_with_progress(
        &self,
        cli_args: &[String],
        mut on_record: impl FnMut(&ExperimentRecord),
    ) -> EvalResult<ExperimentReport> {
        self.config.validate()?;
        if self.config.inits.contains(&InitStrategy::Quantum) && self.sampler.is_none() {
            return Err(EvalError::InvalidConfig(
                "sweep includes quantum initialization but no sampler is attached".into(),
            ));
        }

        info!(
            name = %self.config.name,
            runs = self.config.total_runs(),
            "starting sweep"
        );

        let mut records = Vec::with_capacity(self.config.total_runs());
        for &n in &self.config.sizes {
            for &seed in &self.config.seeds {
                for &init in &self.config.inits {
                    let record = self.run_cell(n, seed, init)?;
                    on_record(&record);
                    records.push(record);
                }
            }
        }

        let summary = summarize(&records);
        Ok(ExperimentReport {
            schema_version: SCHEMA_VERSION.into(),
            timestamp: chrono::Utc::now(),
            name: self.config.name.clone(),
            backend: self.config.backend.clone(),
            config: self.config.clone(),
            records,
            summary,
            reproducibility: ReproducibilityInfo::capture(cli_args),
        })
    }

    fn run_cell(&self, n: usize, seed: u64, init: InitStrategy) -> EvalResult<ExperimentRecord> {
        let mts_config = MtsConfig {
            init,
            ..self.config.mts.clone()
        };
        let mut search = MemeticTabuSearch::new(mts_config);
        if let Some(sampler) = self.sampler {
            search = search.with_sampler(sampler, self.config.sampler);
        }

        let start = Instant::now();
        let outcome = search.run(n, seed)?;
        let runtime_seconds = start.elapsed().as_secs_f64();

        info!(
            n,
            seed,
            init = %init,
            best_energy = outcome.best_energy,
            runtime_seconds,
            "run complete"
        );

        Ok(ExperimentRecord {
            n,
            seed,
            init,
            init_used: outcome.init_used,
            best_energy: outcome.best_energy,
            merit_factor: merit_factor(&outcome.best),
            best_sequence: outcome.best,
            runtime_seconds,
            evaluations: outcome.evaluations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_config() -> ExperimentConfig {
        ExperimentConfig {
            sizes: vec![5, 6],
            seeds: vec![1, 2],
            inits: vec![InitStrategy::Random],
            mts: MtsConfig {
                population_size: 4,
                mts_steps: 10,
                local_iters: 20,
                tabu_tenure: 4,
                patience: 5,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn sweep_produces_one_record_per_cell() {
        let config = tiny_config();
        let expected = config.total_runs();
        let report = Runner::new(config).run(&[]).unwrap();
        assert_eq!(report.records.len(), expected);
        assert_eq!(report.summary.len(), 2);
        assert_eq!(report.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn sweep_results_are_deterministic() {
        let a = Runner::new(tiny_config()).run(&[]).unwrap();
        let b = Runner::new(tiny_config()).run(&[]).unwrap();
        let energies = |r: &ExperimentReport| -> Vec<u64> {
            r.records.iter().map(|rec| rec.best_energy).collect()
        };
        assert_eq!(energies(&a), energies(&b));
    }

    #[test]
    fn quantum_cells_without_sampler_are_rejected_up_front() {
        let config = ExperimentConfig {
            inits: vec![InitStrategy::Quantum],
            ..tiny_config()
        };
        assert!(matches!(
            Runner::new(config).run(&[]),
            Err(EvalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_axes_are_rejected() {
        let config = ExperimentConfig {
            sizes: vec![],
            ..tiny_config()
        };
        assert!(matches!(
            Runner::new(config).run(&[]),
            Err(EvalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn report_exports_to_json() {
        let report = Runner::new(tiny_config()).run(&["merit".into()]).unwrap();
        let json = export::to_json(&report, &export::ExportConfig::default()).unwrap();
        assert!(json.contains("schema_version"));
        assert!(json.contains("best_energy"));
        assert!(json.contains("reproducibility"));
    }
}
