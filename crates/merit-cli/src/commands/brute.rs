//! Brute-force command implementation.
//!
//! `merit brute -n <N>`: exhaustive ground truth for small lengths.

use console::style;

use merit_core::{brute_force_minimum, merit_factor};

/// Execute the brute command.
pub fn execute(n: usize) -> anyhow::Result<()> {
    let (sequence, energy) = brute_force_minimum(n)?;
    println!(
        "{} optimal energy for n={}",
        style("merit").cyan().bold(),
        n
    );
    println!("  sequence:     {}", style(&sequence).green());
    println!("  energy:       {}", style(energy).yellow());
    println!("  merit factor: {:.4}", merit_factor(&sequence));
    Ok(())
}
