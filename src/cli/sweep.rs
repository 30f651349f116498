//! `convdiff sweep`: schemes × velocities × grid sizes

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;

use convdiff_rs::output::{convergence_series, plot_error_convergence, CsvExporter, Exporter};
use convdiff_rs::schemes::Scheme;
use convdiff_rs::solver::{ParameterSweep, RunConfiguration};

use super::{path_str, PlotFormat};

/// Arguments of `convdiff sweep`
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// JSON file with the base parameters (scheme is ignored)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Schemes to compare
    #[arg(long, value_delimiter = ',', default_value = "CDS,UDS,PLDS")]
    pub schemes: Vec<String>,

    /// Velocities [m/s]
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_value = "1,2")]
    pub velocities: Vec<f64>,

    /// Grid node counts
    #[arg(long, value_delimiter = ',', default_value = "5,10,20,50,100")]
    pub gridpoints: Vec<usize>,

    /// Output directory
    #[arg(short, long, default_value = "Plots")]
    pub output: PathBuf,

    /// Plot format
    #[arg(long, value_enum, default_value = "png")]
    pub format: PlotFormat,

    /// Skip per-run plots and CSV files
    #[arg(long)]
    pub summary_only: bool,
}

impl SweepArgs {
    /// Sweep described by the arguments
    pub fn sweep(&self) -> Result<ParameterSweep> {
        let base = match &self.config {
            Some(path) => RunConfiguration::from_path(path)
                .with_context(|| format!("cannot load configuration {}", path.display()))?
                .parameters(),
            None => Default::default(),
        };

        let schemes = self
            .schemes
            .iter()
            .map(|s| s.parse::<Scheme>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParameterSweep::new(base)
            .schemes(&schemes)
            .velocities(&self.velocities)
            .gridpoints(&self.gridpoints))
    }
}

/// Run `convdiff sweep`
pub fn execute(args: SweepArgs) -> Result<()> {
    let sweep = args.sweep()?;
    if sweep.is_empty() {
        bail!("sweep has no points");
    }

    let outcomes = sweep.run();

    for outcome in &outcomes {
        match &outcome.result {
            Ok(record) => {
                if !args.summary_only {
                    super::write_record(record, &outcome.point.output_dir(&args.output), args.format)?;
                }
                println!(
                    "{:<24} error = {:>12.6} %  Pe_local = {:.4}",
                    outcome.point.relative_path(),
                    record.error,
                    record.local_peclet
                );
            }
            Err(err) => println!("{:<24} FAILED: {err}", outcome.point.relative_path()),
        }
    }

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;

    let summary = args.output.join("sweep.csv");
    CsvExporter::default()
        .export_sweep(&outcomes, path_str(&summary)?)
        .with_context(|| format!("cannot write {}", summary.display()))?;

    let plot = args.output.join(format!("convergence.{}", args.format.extension()));
    plot_error_convergence(&convergence_series(&outcomes), path_str(&plot)?, None)
        .map_err(|e| anyhow!("cannot draw {}: {e}", plot.display()))?;

    println!("Summary saved to {}", summary.display());
    println!("Convergence plot saved to {}", plot.display());

    Ok(())
}
