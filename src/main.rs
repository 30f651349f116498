//! convdiff command-line interface
//!
//! Solves the steady 1D convection-diffusion problem from flags, a JSON
//! configuration or interactive prompts, and writes plots and CSV files.

mod cli;

use clap::{Parser, Subcommand};

/// Steady 1D convection-diffusion solver (CDS, UDS, PLDS)
#[derive(Parser)]
#[command(name = "convdiff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Steady 1D convection-diffusion solver", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); defaults to RUST_LOG, then info
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one configuration
    Solve(cli::solve::SolveArgs),
    /// Sweep schemes, velocities and grid sizes
    Sweep(cli::sweep::SweepArgs),
    /// Prompt for a velocity and a scheme, then solve
    Interactive(cli::interactive::InteractiveArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    cli::init_logging(cli.log_level.as_deref());

    match cli.command {
        Commands::Solve(args) => cli::solve::execute(args),
        Commands::Sweep(args) => cli::sweep::execute(args),
        Commands::Interactive(args) => cli::interactive::execute(args),
    }
}
