//! Error against grid size
//!
//! Plots the signed relative error of sweep records against their node count,
//! one line per scheme (or per velocity), to show how each scheme converges
//! under refinement.

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use super::{padded_range, select_backend, Backend};
use crate::solver::SweepOutcome;

/// One line of a convergence plot: `(gridpoints, error)` pairs
pub type ConvergenceSeries = (String, Vec<(usize, f64)>);

/// Group successful sweep outcomes into one series per scheme and velocity
///
/// Series keep the sweep order; failed points are skipped.
pub fn convergence_series(outcomes: &[SweepOutcome]) -> Vec<ConvergenceSeries> {
    let mut series: Vec<ConvergenceSeries> = Vec::new();

    for outcome in outcomes {
        let Some(record) = outcome.record() else {
            continue;
        };

        let label = format!("{} u={}", outcome.point.scheme, outcome.point.velocity);
        let sample = (outcome.point.gridpoints, record.error);

        match series.iter_mut().find(|(name, _)| *name == label) {
            Some((_, points)) => points.push(sample),
            None => series.push((label, vec![sample])),
        }
    }

    series
}

/// Plot error convergence series
///
/// # Arguments
///
/// * `series` - Labelled `(gridpoints, error)` lines, see [`convergence_series`]
/// * `output_path` - Path to save the plot (PNG or SVG, by extension)
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// let outcomes = sweep.run();
/// plot_error_convergence(&convergence_series(&outcomes), "convergence.png", None)?;
/// ```
pub fn plot_error_convergence(
    series: &[ConvergenceSeries],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if series.iter().all(|(_, points)| points.is_empty()) {
        return Err("No convergence data provided".into());
    }

    let default_config = PlotConfig::convergence(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_n = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(n, _)| *n))
        .max()
        .unwrap_or(2);

    let y_range = padded_range(series.iter().flat_map(|(_, points)| points.iter().map(|(_, e)| *e)));

    match select_backend(output_path) {
        Backend::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_convergence_impl(backend, series, config, max_n, y_range)
        }
        Backend::Bitmap => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_convergence_impl(backend, series, config, max_n, y_range)
        }
    }
}

/// Implementation for convergence plotting with concrete backend
fn plot_convergence_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[ConvergenceSeries],
    config: &PlotConfig,
    max_n: usize,
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
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..(max_n as f64 * 1.05), y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|n| format!("{:.0}", n))
            .y_label_formatter(&|e| format!("{:.3}", e))
            .draw()?;
    }

    for (idx, (label, points)) in series.iter().enumerate() {
        let color = config.get_series_color(idx);
        let coords: Vec<(f64, f64)> = points.iter().map(|(n, e)| (*n as f64, *e)).collect();

        chart
            .draw_series(LineSeries::new(
                coords.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        chart.draw_series(coords.iter().map(|c| Circle::new(*c, 3, color.filled())))?;
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
