//! Sweeps that exercise the real statevector sampler.

use merit_core::SamplerSettings;
use merit_eval::{ExperimentConfig, Runner};
use merit_mts::{InitStrategy, MtsConfig};
use merit_sim::TrotterSampler;

fn config() -> ExperimentConfig {
    ExperimentConfig {
        sizes: vec![5, 6],
        seeds: vec![11, 12],
        inits: vec![InitStrategy::Random, InitStrategy::Quantum],
        mts: MtsConfig {
            population_size: 4,
            mts_steps: 8,
            local_iters: 20,
            tabu_tenure: 4,
            patience: 5,
            ..Default::default()
        },
        sampler: SamplerSettings {
            trotter_steps: 2,
            evolution_time: 0.7,
            shots: 128,
        },
        ..Default::default()
    }
}

#[test]
fn hybrid_sweep_covers_both_init_strategies() {
    let sampler = TrotterSampler::new();
    let report = Runner::new(config()).with_sampler(&sampler).run(&[]).unwrap();

    assert_eq!(report.records.len(), 2 * 2 * 2);
    for summary in &report.summary {
        assert!(summary.mean_best_random.is_some());
        assert!(summary.mean_best_quantum.is_some());
        assert!(summary.improvement_pct.is_some());
    }
    // Every record reports the energy of the sequence it carries.
    for record in &report.records {
        assert_eq!(merit_core::energy(&record.best_sequence), record.best_energy);
    }
}

#[test]
fn config_round_trips_through_json() {
    let config = config();
    let json = serde_json::to_string(&config).unwrap();
    let back: ExperimentConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.sizes, config.sizes);
    assert_eq!(back.inits, config.inits);
    assert_eq!(back.sampler, config.sampler);
}
