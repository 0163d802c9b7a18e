//! merit command-line interface.
//!
//! Hybrid quantum-classical Memetic Tabu Search for the Low
//! Autocorrelation Binary Sequences problem.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{brute, run, sample, sweep};

/// merit - hybrid quantum-classical LABS optimizer
#[derive(Parser)]
#[command(name = "merit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single Memetic Tabu Search
    Run {
        /// Sequence length
        #[arg(short, long)]
        n: usize,

        /// Run seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Initialization: random or quantum
        #[arg(long, default_value = "random")]
        init: String,

        /// Number of combine steps
        #[arg(long, default_value_t = 150)]
        steps: usize,

        /// Local-search iterations per individual
        #[arg(long, default_value_t = 100)]
        local_iters: usize,

        /// Tabu tenure
        #[arg(long, default_value_t = 10)]
        tabu: usize,

        /// Population size
        #[arg(long, default_value_t = 20)]
        population: usize,

        /// Trotter steps for the quantum sampler
        #[arg(long, default_value_t = 3)]
        trotter_steps: usize,

        /// Evolution time for the quantum sampler
        #[arg(long, default_value_t = 1.0)]
        evolution_time: f64,

        /// Measurement shots for the quantum sampler
        #[arg(long, default_value_t = 1024)]
        shots: u64,
    },

    /// Run a full sweep from a JSON experiment configuration
    Sweep {
        /// Path to the experiment configuration (JSON)
        #[arg(short, long)]
        config: String,

        /// Output path for the JSON report (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Brute-force the optimal energy for a small length
    Brute {
        /// Sequence length (at most 24)
        #[arg(short, long)]
        n: usize,
    },

    /// Run the quantum sampler alone and print its distribution
    Sample {
        /// Sequence length
        #[arg(short, long)]
        n: usize,

        /// Sampling seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Trotter steps
        #[arg(long, default_value_t = 3)]
        trotter_steps: usize,

        /// Evolution time
        #[arg(long, default_value_t = 1.0)]
        evolution_time: f64,

        /// Measurement shots
        #[arg(long, default_value_t = 1024)]
        shots: u64,

        /// Show at most this many entries
        #[arg(long, default_value_t = 16)]
        top: usize,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            n,
            seed,
            init,
            steps,
            local_iters,
            tabu,
            population,
            trotter_steps,
            evolution_time,
            shots,
        } => run::execute(
            n,
            seed,
            &init,
            steps,
            local_iters,
            tabu,
            population,
            trotter_steps,
            evolution_time,
            shots,
        ),
        Commands::Sweep { config, output } => sweep::execute(&config, output.as_deref()),
        Commands::Brute { n } => brute::execute(n),
        Commands::Sample {
            n,
            seed,
            trotter_steps,
            evolution_time,
            shots,
            top,
        } => sample::execute(n, seed, trotter_steps, evolution_time, shots, top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_subcommand_parses() {
        let cli = Cli::parse_from(["merit", "run", "-n", "20", "--seed", "7", "--init", "quantum"]);
        match cli.command {
            Commands::Run { n, seed, init, .. } => {
                assert_eq!(n, 20);
                assert_eq!(seed, 7);
                assert_eq!(init, "quantum");
            }
            _ => panic!("expected run subcommand"),
        }
    }
}
