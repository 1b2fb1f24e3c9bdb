//! Logicnet - Digital Logic Simulator
//!
//! Runs a reference circuit and prints one line per iteration.
//!
//! # Usage
//!
//! ```bash
//! logicnet sr-latch-race --steps 8
//! RUST_LOG=logicnet_core=trace logicnet edge-detector
//! ```

use clap::Parser;
use logicnet_core::{error::Result, scenarios::Scenario, SettleConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Discrete-time digital logic simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario to run (edge-detector, sr-latch-race)
    #[arg(value_name = "SCENARIO")]
    scenario: Scenario,

    /// Number of iterations to record after the stimulus
    #[arg(short, long, default_value_t = 8)]
    steps: usize,

    /// Iteration bound while preparing the circuit
    #[arg(long, default_value_t = logicnet_core::system::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Verbose output (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

/// Log filter used when RUST_LOG is unset.
fn fallback_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { "debug" } else { "info" })
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(args.verbose));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
    }

    let config = SettleConfig::new().with_max_iterations(args.max_iterations);
    info!(scenario = %args.scenario, steps = args.steps, "running scenario");

    let trace = args.scenario.run(args.steps, &config)?;
    for step in &trace.steps {
        println!("{}", step);
    }

    Ok(())
}
