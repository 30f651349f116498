//! Visualization of solution records
//!
//! This module provides tools to visualize results using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **steady**: φ(x) profiles, numerical against analytical
//! - **convergence**: Error against grid size for sweeps
//!
//! The backend is picked from the file extension: `.svg` gives SVG, anything
//! else a bitmap (PNG).
//!
//! # When to Use Which Function
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | One run against the analytical profile | `steady` | `plot_solution` |
//! | Compare schemes on one domain | `steady` | `plot_solution_comparison` |
//! | Error under grid refinement | `convergence` | `plot_error_convergence` |

pub mod config;
pub mod convergence;
pub mod steady;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use steady::{plot_solution, plot_solution_comparison};

pub use convergence::{convergence_series, plot_error_convergence, ConvergenceSeries};

use std::ops::Range;

/// Drawing backend chosen from an output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Backend {
    Svg,
    Bitmap,
}

pub(crate) fn select_backend(output_path: &str) -> Backend {
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    if ext.eq_ignore_ascii_case("svg") {
        Backend::Svg
    } else {
        Backend::Bitmap
    }
}

/// Data range with a 5 % margin on both sides
///
/// A flat series gets a unit-wide range around its value.
pub(crate) fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return 0.0..1.0;
    }

    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        return (min - 0.5)..(max + 0.5);
    }

    let margin = 0.05 * span;
    (min - margin)..(max + margin)
}
