//! Export of solution records
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format means adding a file without modifying existing code.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use convdiff_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // One run: x, numerical_phi, analytical_phi
//! exporter.export_solution(&record, "cds.csv")?;
//!
//! // Sweep summary: one row per solved point
//! exporter.export_sweep(&outcomes, "sweep.csv")?;
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter, CsvMetadata};

use crate::solver::{SolutionRecord, SweepOutcome};

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so the caller
/// can react to the precise failure without boxing.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports one record: node position, numerical φ and analytical φ at the
    /// nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `record` contains no nodes or non-finite values
    fn export_solution(&self, record: &SolutionRecord, path: &str) -> Result<(), Self::Error>;

    /// Exports a sweep summary: scheme, velocity, gridpoints, local and global
    /// Péclet numbers and error for every solved point.
    ///
    /// Failed points are left out.
    ///
    /// # Errors
    ///
    /// Returns an error if no point was solved or the path is invalid.
    fn export_sweep(&self, outcomes: &[SweepOutcome], path: &str) -> Result<(), Self::Error>;
}
