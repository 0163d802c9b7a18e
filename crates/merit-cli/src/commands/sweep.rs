//! Sweep command implementation.
//!
//! `merit sweep --config <experiment.json> [--output <report.json>]`

use std::path::Path;

use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use merit_eval::{ExperimentConfig, Runner, export};
use merit_sim::TrotterSampler;

/// Execute the sweep command.
pub fn execute(config_path: &str, output: Option<&str>) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(config_path)
        .with_context(|| format!("failed to read {config_path}"))?;
    let config: ExperimentConfig =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {config_path}"))?;

    let cli_args: Vec<String> = std::env::args().collect();
    let sampler = TrotterSampler::new();
    let runner = Runner::new(config.clone()).with_sampler(&sampler);

    let bar = ProgressBar::new(config.total_runs() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
            .expect("static template is valid")
            .progress_chars("=> "),
    );

    let report = runner.run_with_progress(&cli_args, |record| {
        bar.set_message(format!(
            "n={} seed={} E={}",
            record.n, record.seed, record.best_energy
        ));
        bar.inc(1);
    })?;
    bar.finish_and_clear();

    let export_config = export::ExportConfig::default();
    if let Some(output_path) = output {
        export::to_file(&report, Path::new(output_path), &export_config)?;
        eprintln!(
            "{} report written to {}",
            style("OK").green().bold(),
            output_path
        );
    } else {
        println!("{}", export::to_json(&report, &export_config)?);
    }

    // Summary to stderr so piped stdout stays clean JSON.
    eprintln!();
    eprintln!("{}", style("Sweep Summary").bold().underlined());
    for entry in &report.summary {
        let improvement = entry
            .improvement_pct
            .map_or_else(|| "-".into(), |p| format!("{p:+.1}%"));
        eprintln!(
            "  n={:<3} best={:<6} quantum-vs-random: {}",
            entry.n, entry.best_energy, improvement
        );
    }
    Ok(())
}
