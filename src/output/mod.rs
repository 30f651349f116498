//! Output module for solution records
//!
//! This module provides tools to output results in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── steady.rs
//! │   └── convergence.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use convdiff_rs::output::{plot_solution, CsvExporter, Exporter};
//!
//! plot_solution(&record, "Plots/CDS/profile.png", None)?;
//! CsvExporter::default().export_solution(&record, "Plots/CDS/profile.csv")?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (plots, graphs)
//! - **Export**: For programmatic analysis (CSV)
//!
//! Plot functions return `Box<dyn Error>` like plotters itself; the exporter
//! has its own typed [`CsvError`].

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    convergence_series, plot_error_convergence, plot_solution, plot_solution_comparison, PlotConfig,
};

pub use export::{CsvConfig, CsvError, CsvExporter, CsvMetadata, Exporter};
