//! CDS vs UDS vs PLDS on the textbook problem
//!
//! ρ·u·dφ/dx = Γ·d²φ/dx², φ(0) = 100, φ(L) = 20
//!
//! Solves the same domain with all three schemes at a mild (u = 2) and a
//! convection-dominated (u = 50) velocity, then sweeps the grid size to show
//! how the error shrinks with N.
//!
//! ```bash
//! cargo run --example scheme_comparison
//! ```

use convdiff_rs::{
    output::{
        convergence_series, plot_error_convergence, plot_solution_comparison, CsvExporter, Exporter, PlotConfig,
    },
    physics::DomainParameters,
    schemes::Scheme,
    solver::{ParameterSweep, Scenario, SolutionRecord, Solver, SteadyStateSolver},
};
use std::error::Error;

fn solve_all(params: DomainParameters) -> Result<Vec<SolutionRecord>, Box<dyn Error>> {
    let solver = SteadyStateSolver::new();
    let mut records = Vec::with_capacity(Scheme::ALL.len());

    for scheme in Scheme::ALL {
        let scenario = Scenario::new(params, scheme)?;
        records.push(solver.solve(&scenario)?);
    }

    Ok(records)
}

fn print_table(records: &[SolutionRecord]) {
    let nodes = records.first().map_or(0, SolutionRecord::len);

    print!("  {:>8}", "x");
    for record in records {
        print!("  {:>12}", record.scheme.acronym());
    }
    println!("  {:>12}", "exact");

    for i in 0..nodes {
        print!("  {:>8.3}", records[0].x[i]);
        for record in records {
            print!("  {:>12.4}", record.numerical_phi[i]);
        }
        println!("  {:>12.4}", records[0].analytical_at_nodes()[i]);
    }

    for record in records {
        println!(
            "  {:<5} error = {:>9.3} %  bounded = {}",
            record.scheme.acronym(),
            record.error,
            record.is_bounded()
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Steady Convection-Diffusion: Scheme Comparison ===\n");

    let tmp_dir = std::env::temp_dir();
    let base = DomainParameters::default().gridpoints(5);

    for velocity in [2.0, 50.0] {
        let params = base.velocity(velocity);
        let records = solve_all(params)?;

        println!(
            "u = {velocity} m/s  (Pe_local = {:.2}, Pe_global = {:.2})",
            records[0].local_peclet, records[0].global_peclet
        );
        print_table(&records);

        let name = format!("scheme_comparison_u{velocity}.png");
        let config = PlotConfig::profile(format!("Schemes at u = {velocity} m/s, N = {}", params.gridpoints));
        plot_solution_comparison(&records, tmp_dir.join(&name).to_str().ok_or("non UTF-8 temp dir")?, Some(&config))?;
        println!("✓ {name}\n");
    }

    // Grid refinement
    println!("Sweeping N for the error convergence plot...");
    let outcomes = ParameterSweep::new(base)
        .velocities(&[1.0, 2.0])
        .gridpoints(&[5, 10, 20, 50, 100, 200, 500])
        .run();

    let summary = tmp_dir.join("scheme_comparison_sweep.csv");
    CsvExporter::default().export_sweep(&outcomes, summary.to_str().ok_or("non UTF-8 temp dir")?)?;
    println!("✓ {}", summary.display());

    let plot = tmp_dir.join("scheme_comparison_convergence.png");
    plot_error_convergence(
        &convergence_series(&outcomes),
        plot.to_str().ok_or("non UTF-8 temp dir")?,
        None,
    )?;
    println!("✓ {}", plot.display());

    println!("\nExpected: CDS overshoots at u = 50, UDS and PLDS stay within [20, 100]");

    Ok(())
}
