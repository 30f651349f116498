//! Steady φ(x) profile plotting
//!
//! This module draws numerical profiles together with their analytical
//! reference, either for one record or overlaid for several records.
//!
//! # Usage
//!
//! ```rust,ignore
//! use convdiff_rs::output::visualization::plot_solution;
//!
//! let record = SteadyStateSolver::new().solve(&scenario)?;
//! plot_solution(&record, "Plots/CDS/profile.png", None)?;
//! ```
//!
//! The y-range is taken from the data with a small margin on both sides,
//! since CDS at high Péclet numbers leaves the `[φ_L, φ₀]` interval.

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use super::{padded_range, select_backend, Backend};
use crate::solver::SolutionRecord;

// =================================================================================================
// Single Record
// =================================================================================================

/// Plot the numerical profile of `record` against its analytical profile
///
/// The numerical profile is drawn with markers at the nodes, the analytical
/// one as a continuous line over the reference grid.
///
/// # Arguments
///
/// * `record` - Solved record
/// * `output_path` - Path to save the plot (PNG or SVG, by extension)
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// plot_solution(&record, "profile.png", None)?;
/// ```
pub fn plot_solution(
    record: &SolutionRecord,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if record.is_empty() {
        return Err("Empty solution record".into());
    }

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::profile(format!(
        "{} (u = {} m/s, N = {})",
        record.scheme.description(),
        record.parameters.velocity,
        record.len()
    ));
    let config = config.unwrap_or(&default_config);

    let x_range = 0.0..record.parameters.length;
    let y_range = padded_range(
        record
            .numerical_phi
            .iter()
            .chain(record.analytical_phi.iter())
            .copied(),
    );

    match select_backend(output_path) {
        Backend::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_solution_impl(backend, record, config, x_range, y_range)
        }
        Backend::Bitmap => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_solution_impl(backend, record, config, x_range, y_range)
        }
    }
}

/// Implementation for single-record plotting with concrete backend
fn plot_solution_impl<DB: DrawingBackend>(
    backend: DB,
    record: &SolutionRecord,
    config: &PlotConfig,
    x_range: std::ops::Range<f64>,
    y_range: std::ops::Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    let reference = config.reference_color;
    chart
        .draw_series(LineSeries::new(
            record
                .analytical_x
                .iter()
                .zip(record.analytical_phi.iter())
                .map(|(x, phi)| (*x, *phi)),
            ShapeStyle::from(&reference).stroke_width(config.line_width),
        ))?
        .label("Analytical")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], reference));

    let color = config.line_color;
    let style = ShapeStyle::from(&color).stroke_width(config.line_width);
    chart
        .draw_series(LineSeries::new(
            record.x.iter().zip(record.numerical_phi.iter()).map(|(x, phi)| (*x, *phi)),
            style,
        ))?
        .label(format!("{} (numerical)", record.scheme))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    chart.draw_series(
        record
            .x
            .iter()
            .zip(record.numerical_phi.iter())
            .map(|(x, phi)| Circle::new((*x, *phi), 4, color.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Comparison
// =================================================================================================

/// Overlay the numerical profiles of several records
///
/// The analytical profile of the first record is drawn as the reference, so
/// the records are expected to share the same physical parameters (typically
/// one record per scheme).
///
/// # Example
///
/// ```rust,ignore
/// let records: Vec<_> = Scheme::ALL.iter().map(|s| solve(*s)).collect();
/// plot_solution_comparison(&records, "comparison.png", None)?;
/// ```
pub fn plot_solution_comparison(
    records: &[SolutionRecord],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let first = records.first().ok_or("No records provided")?;

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_x = records
        .iter()
        .map(|r| r.parameters.length)
        .fold(0.0, f64::max);

    let y_range = padded_range(
        records
            .iter()
            .flat_map(|r| r.numerical_phi.iter())
            .chain(first.analytical_phi.iter())
            .copied(),
    );

    match select_backend(output_path) {
        Backend::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, records, config, 0.0..max_x, y_range)
        }
        Backend::Bitmap => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, records, config, 0.0..max_x, y_range)
        }
    }
}

/// Implementation for comparison plotting with concrete backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    records: &[SolutionRecord],
    config: &PlotConfig,
    x_range: std::ops::Range<f64>,
    y_range: std::ops::Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    // Reference from the first record
    if let Some(first) = records.first() {
        let reference = config.reference_color;
        chart
            .draw_series(LineSeries::new(
                first
                    .analytical_x
                    .iter()
                    .zip(first.analytical_phi.iter())
                    .map(|(x, phi)| (*x, *phi)),
                ShapeStyle::from(&reference).stroke_width(config.line_width),
            ))?
            .label("Analytical")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], reference));
    }

    for (idx, record) in records.iter().enumerate() {
        let color = config.get_series_color(idx);

        chart
            .draw_series(LineSeries::new(
                record.x.iter().zip(record.numerical_phi.iter()).map(|(x, phi)| (*x, *phi)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(format!("{} (N = {})", record.scheme, record.len()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::DomainParameters;
    use crate::schemes::Scheme;
    use crate::solver::{Scenario, Solver, SteadyStateSolver};

    fn record(scheme: Scheme, velocity: f64) -> SolutionRecord {
        let params = DomainParameters::default().velocity(velocity).gridpoints(10);
        let scenario = Scenario::new(params, scheme).unwrap();
        SteadyStateSolver::new().solve(&scenario).unwrap()
    }

    #[test]
    fn test_comparison_requires_records() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("empty.png");

        let result = plot_solution_comparison(&[], path.to_str().unwrap(), None);
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    #[ignore = "requires system fonts"]
    fn test_plot_solution_png() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("profile.png");

        plot_solution(&record(Scheme::Uds, 2.0), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    #[ignore = "requires system fonts"]
    fn test_plot_solution_comparison_svg() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("comparison.svg");

        // CDS oscillates at this velocity
        let records: Vec<_> = Scheme::ALL.iter().map(|s| record(*s, 50.0)).collect();

        plot_solution_comparison(&records, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }
}
