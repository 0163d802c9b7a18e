//! Single-run command implementation.
//!
//! `merit run -n <N> [--seed <S>] [--init random|quantum] [...]`

use anyhow::bail;
use console::style;

use merit_core::{SamplerSettings, merit_factor};
use merit_mts::{InitStrategy, MemeticTabuSearch, MtsConfig};
use merit_sim::TrotterSampler;

/// Execute the run command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    n: usize,
    seed: u64,
    init: &str,
    steps: usize,
    local_iters: usize,
    tabu: usize,
    population: usize,
    trotter_steps: usize,
    evolution_time: f64,
    shots: u64,
) -> anyhow::Result<()> {
    let init = match init {
        "random" => InitStrategy::Random,
        "quantum" => InitStrategy::Quantum,
        other => bail!("unknown init strategy '{other}', expected 'random' or 'quantum'"),
    };

    let config = MtsConfig {
        population_size: population,
        mts_steps: steps,
        local_iters,
        tabu_tenure: tabu,
        init,
        ..Default::default()
    };
    let settings = SamplerSettings {
        trotter_steps,
        evolution_time,
        shots,
    };

    let sampler = TrotterSampler::new();
    let search = MemeticTabuSearch::new(config).with_sampler(&sampler, settings);
    let outcome = search.run(n, seed)?;

    println!(
        "{} n={} seed={} init={}",
        style("merit").cyan().bold(),
        n,
        seed,
        outcome.init_used
    );
    println!("  best sequence: {}", style(&outcome.best).green());
    println!("  best energy:   {}", style(outcome.best_energy).yellow());
    println!(
        "  merit factor:  {:.4}",
        merit_factor(&outcome.best)
    );
    println!("  evaluations:   {}", outcome.evaluations);
    Ok(())
}
