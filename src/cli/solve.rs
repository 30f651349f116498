//! `convdiff solve`: one configuration, one plot, one CSV

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use convdiff_rs::solver::{RunConfiguration, Solver, SteadyStateSolver, SweepPoint};

use super::PlotFormat;

/// Arguments of `convdiff solve`
///
/// Flags override the values read from `--config`.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// JSON run configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Differencing scheme (CDS, UDS, PLDS)
    #[arg(short, long)]
    pub scheme: Option<String>,

    /// Velocity u [m/s]
    #[arg(short = 'u', long, allow_negative_numbers = true)]
    pub velocity: Option<f64>,

    /// Density ρ [kg/m³]
    #[arg(long)]
    pub density: Option<f64>,

    /// Diffusion coefficient Γ
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Domain length L [m]
    #[arg(long)]
    pub length: Option<f64>,

    /// φ at the inlet
    #[arg(long, allow_negative_numbers = true)]
    pub inlet_bc: Option<f64>,

    /// φ at the outlet
    #[arg(long, allow_negative_numbers = true)]
    pub outlet_bc: Option<f64>,

    /// Number of grid nodes
    #[arg(short = 'n', long)]
    pub gridpoints: Option<usize>,

    /// Output directory
    #[arg(short, long, default_value = "Plots")]
    pub output: PathBuf,

    /// Plot format
    #[arg(long, value_enum, default_value = "png")]
    pub format: PlotFormat,
}

impl SolveArgs {
    /// Configuration file (or defaults) with the flags applied on top
    pub fn configuration(&self) -> Result<RunConfiguration> {
        let mut config = match &self.config {
            Some(path) => RunConfiguration::from_path(path)
                .with_context(|| format!("cannot load configuration {}", path.display()))?,
            None => RunConfiguration::default(),
        };

        if let Some(scheme) = &self.scheme {
            config.scheme = scheme.clone();
        }
        if let Some(v) = self.velocity {
            config.velocity = v;
        }
        if let Some(v) = self.density {
            config.density = v;
        }
        if let Some(v) = self.gamma {
            config.gamma = v;
        }
        if let Some(v) = self.length {
            config.length = v;
        }
        if let Some(v) = self.inlet_bc {
            config.inlet_bc = v;
        }
        if let Some(v) = self.outlet_bc {
            config.outlet_bc = v;
        }
        if let Some(v) = self.gridpoints {
            config.gridpoints = v;
        }

        Ok(config)
    }
}

/// Run `convdiff solve`
pub fn execute(args: SolveArgs) -> Result<()> {
    let config = args.configuration()?;
    let scenario = config.validate().context("invalid run configuration")?;

    log::info!("solving {scenario:?}");

    let record = SteadyStateSolver::new().solve(&scenario)?;

    let point = SweepPoint {
        scheme: scenario.scheme,
        velocity: scenario.domain.velocity(),
        gridpoints: scenario.gridpoints(),
    };
    let plot = super::write_record(&record, &point.output_dir(&args.output), args.format)?;

    super::report(&record, &mut std::io::stdout().lock())?;
    println!("Plot saved to {}", plot.display());

    Ok(())
}
