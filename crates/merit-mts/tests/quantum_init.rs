//! Search runs seeded by the real statevector sampler.

use merit_core::SamplerSettings;
use merit_mts::{InitKind, InitStrategy, MemeticTabuSearch, MtsConfig};
use merit_sim::TrotterSampler;

fn config() -> MtsConfig {
    MtsConfig {
        population_size: 6,
        mts_steps: 25,
        local_iters: 40,
        tabu_tenure: 5,
        patience: 8,
        init: InitStrategy::Quantum,
        ..Default::default()
    }
}

fn settings() -> SamplerSettings {
    SamplerSettings {
        trotter_steps: 2,
        evolution_time: 0.7,
        shots: 256,
    }
}

#[test]
fn quantum_seeded_run_completes_and_reports_quantum_init() {
    let sampler = TrotterSampler::new();
    let outcome = MemeticTabuSearch::new(config())
        .with_sampler(&sampler, settings())
        .run(6, 42)
        .unwrap();
    assert_eq!(outcome.init_used, InitKind::Quantum);
    assert_eq!(outcome.best.len(), 6);
    assert_eq!(merit_core::energy(&outcome.best), outcome.best_energy);
}

#[test]
fn quantum_seeded_runs_are_deterministic_end_to_end() {
    let sampler = TrotterSampler::new();
    let search = MemeticTabuSearch::new(config()).with_sampler(&sampler, settings());
    let a = search.run(7, 123).unwrap();
    let b = search.run(7, 123).unwrap();
    assert_eq!(a, b);
}
