//! Sample command implementation.
//!
//! `merit sample -n <N> [--shots <S>]`: run the quantum sampler alone
//! and print the head of its output distribution.

use console::style;

use merit_core::{SampleRequest, Sampler, energy};
use merit_sim::TrotterSampler;

/// Execute the sample command.
pub fn execute(
    n: usize,
    seed: u64,
    trotter_steps: usize,
    evolution_time: f64,
    shots: u64,
    top: usize,
) -> anyhow::Result<()> {
    let request = SampleRequest {
        n,
        trotter_steps,
        evolution_time,
        shots,
        seed,
    };
    let distribution = TrotterSampler::new().sample(&request)?;

    println!(
        "{} sampled {} shots over {} distinct sequences (n={})",
        style("merit").cyan().bold(),
        distribution.total(),
        distribution.len(),
        n
    );

    let mut entries: Vec<_> = distribution.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    for (sequence, count) in entries.into_iter().take(top) {
        println!(
            "  {}  count={:<6} E={}",
            style(sequence).green(),
            count,
            energy(sequence)
        );
    }
    Ok(())
}
