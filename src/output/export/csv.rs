//! CSV export of solution records and sweeps
//!
//! CSV is readable by spreadsheets, pandas, MATLAB and most analysis tools.
//!
//! # Features
//!
//! - **Per-run files**: node position, numerical φ and analytical φ
//! - **Sweep summaries**: one row per solved sweep point
//! - **Metadata support**: optional `#` header with run parameters
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Validation**: rejects empty data and NaN/Inf values
//!
//! # Quick Examples
//!
//! ## Single Run
//!
//! ```rust,ignore
//! use convdiff_rs::output::export::{CsvExporter, Exporter};
//!
//! CsvExporter::default().export_solution(&record, "cds.csv")?;
//! ```
//!
//! **Output** (`cds.csv`):
//! ```csv
//! x,numerical_phi,analytical_phi
//! 0.000000,100.000000,100.000000
//! 0.200000,90.153846,90.004284
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use convdiff_rs::output::export::{CsvConfig, CsvExporter, CsvMetadata};
//!
//! let config = CsvConfig::default().with_metadata(CsvMetadata::from_record(&record));
//! CsvExporter::new(config).export_solution(&record, "cds.csv")?;
//! ```
//!
//! **Output** (`cds.csv`):
//! ```csv
//! # Convection-Diffusion Solution
//! # Generated: 2026-10-18T09:30:00+00:00
//! # Scheme: Central Differencing Scheme
//! # Solver: Steady TDMA
//! # Velocity: 2 m/s
//! # Gridpoints: 5
//! # Local Peclet: 0.4
//! # Global Peclet: 2
//! # Error: -20.05 %
//! #
//! x,numerical_phi,analytical_phi
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use super::Exporter;
use crate::solver::{SolutionRecord, SweepOutcome};

// =============================================================================
// Errors
// =============================================================================

/// Failures of the CSV exporter
#[derive(Debug, Error)]
pub enum CsvError {
    /// Nothing to write
    #[error("empty data: {0}")]
    EmptyData(String),

    /// NaN or infinity in a column
    #[error("invalid data: NaN or Inf detected in {column} at row {row}")]
    NonFinite { column: &'static str, row: usize },

    /// Columns of different lengths
    #[error("data length mismatch: {0}")]
    LengthMismatch(String),

    /// Delimiter and decimal separator collide
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// File could not be created or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add header comments with run info
/// - `metadata`: Run metadata to include
///
/// # Example
///
/// ```rust
/// use convdiff_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(10);
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.decimal_separator, ',');
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set decimal separator
    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    fn validate(&self) -> Result<(), CsvError> {
        if self.delimiter == self.decimal_separator {
            return Err(CsvError::InvalidConfig(format!(
                "delimiter and decimal separator are both '{}'",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Scheme description (e.g. "Upwind Differencing Scheme")
    pub scheme: Option<String>,

    /// Solver name (e.g. "Steady TDMA")
    pub solver_name: Option<String>,

    /// Velocity u (m/s)
    pub velocity: Option<f64>,

    /// Number of grid nodes
    pub gridpoints: Option<usize>,

    /// Cell Péclet number
    pub local_peclet: Option<f64>,

    /// Domain Péclet number
    pub global_peclet: Option<f64>,

    /// Signed relative error (%)
    pub error: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Header describing one solved record
    pub fn from_record(record: &SolutionRecord) -> Self {
        Self {
            scheme: Some(record.scheme.description().to_string()),
            solver_name: record.get_metadata("solver").map(str::to_string),
            velocity: Some(record.parameters.velocity),
            gridpoints: Some(record.len()),
            local_peclet: Some(record.local_peclet),
            global_peclet: Some(record.global_peclet),
            error: Some(record.error),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header(out: &mut impl Write, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Convection-Diffusion Solution")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(scheme) = &metadata.scheme {
        writeln!(out, "# Scheme: {}", scheme)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(u) = metadata.velocity {
        writeln!(out, "# Velocity: {} m/s", u)?;
    }
    if let Some(n) = metadata.gridpoints {
        writeln!(out, "# Gridpoints: {}", n)?;
    }
    if let Some(pe) = metadata.local_peclet {
        writeln!(out, "# Local Peclet: {}", pe)?;
    }
    if let Some(pe) = metadata.global_peclet {
        writeln!(out, "# Global Peclet: {}", pe)?;
    }
    if let Some(error) = metadata.error {
        writeln!(out, "# Error: {} %", error)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn check_finite(column: &'static str, values: &[f64]) -> Result<(), CsvError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(row) => Err(CsvError::NonFinite { column, row }),
        None => Ok(()),
    }
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    fn write_header(&self, out: &mut impl Write, columns: &[&str]) -> std::io::Result<()> {
        if self.config.include_metadata {
            if let Some(metadata) = &self.config.metadata {
                write_metadata_header(out, metadata)?;
            }
        }

        writeln!(out, "{}", columns.join(&self.config.delimiter.to_string()))
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_solution(&self, record: &SolutionRecord, path: &str) -> Result<(), CsvError> {
        // ============================= Validation =============================

        self.config.validate()?;

        if record.is_empty() {
            return Err(CsvError::EmptyData("solution record has no nodes".to_string()));
        }

        let analytical = record.analytical_at_nodes();
        if analytical.len() != record.len() || record.x.len() != record.len() {
            return Err(CsvError::LengthMismatch(format!(
                "{} positions, {} numerical values, {} analytical values",
                record.x.len(),
                record.len(),
                analytical.len()
            )));
        }

        check_finite("x", record.x.as_slice())?;
        check_finite("numerical_phi", record.numerical_phi.as_slice())?;
        check_finite("analytical_phi", &analytical)?;

        // ============================= Write ==================================

        let mut out = BufWriter::new(File::create(path)?);
        self.write_header(&mut out, &["x", "numerical_phi", "analytical_phi"])?;

        let delimiter = self.config.delimiter;
        for ((x, phi), reference) in record.x.iter().zip(record.numerical_phi.iter()).zip(&analytical) {
            writeln!(
                out,
                "{}{}{}{}{}",
                format_number(*x, &self.config),
                delimiter,
                format_number(*phi, &self.config),
                delimiter,
                format_number(*reference, &self.config)
            )?;
        }

        out.flush()?;
        log::debug!("solution written to {path}");

        Ok(())
    }

    fn export_sweep(&self, outcomes: &[SweepOutcome], path: &str) -> Result<(), CsvError> {
        // ============================= Validation =============================

        self.config.validate()?;

        let solved: Vec<&SolutionRecord> = outcomes.iter().filter_map(SweepOutcome::record).collect();

        if solved.is_empty() {
            return Err(CsvError::EmptyData("sweep has no solved points".to_string()));
        }

        for (row, record) in solved.iter().enumerate() {
            let values = [record.parameters.velocity, record.local_peclet, record.global_peclet, record.error];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(CsvError::NonFinite { column: "sweep", row });
            }
        }

        let skipped = outcomes.len() - solved.len();
        if skipped > 0 {
            log::warn!("{skipped} failed sweep points left out of {path}");
        }

        // ============================= Write ==================================

        let mut out = BufWriter::new(File::create(path)?);
        self.write_header(
            &mut out,
            &["scheme", "velocity", "gridpoints", "local_pe", "global_pe", "error"],
        )?;

        let d = self.config.delimiter;
        for record in solved {
            writeln!(
                out,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                record.scheme,
                format_number(record.parameters.velocity, &self.config),
                record.len(),
                format_number(record.local_peclet, &self.config),
                format_number(record.global_peclet, &self.config),
                format_number(record.error, &self.config),
            )?;
        }

        out.flush()?;
        log::debug!("sweep summary written to {path}");

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::DomainParameters;
    use crate::schemes::Scheme;
    use crate::solver::{ParameterSweep, Scenario, Solver, SteadyStateSolver};
    use std::fs;

    fn record() -> SolutionRecord {
        let params = DomainParameters::default().velocity(2.0).gridpoints(5);
        let scenario = Scenario::new(params, Scheme::Cds).unwrap();
        SteadyStateSolver::new().solve(&scenario).unwrap()
    }

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> String {
        dir.path().join(name).to_str().unwrap().to_string()
    }

    #[test]
    fn test_export_solution_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "run.csv");

        CsvExporter::default().export_solution(&record(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "x,numerical_phi,analytical_phi");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "0.000000,100.000000,100.000000");
        assert!(lines[2].starts_with("0.200000,90.153846,"));
        assert!(lines[5].starts_with("0.800000,20.000000,"));
    }

    #[test]
    fn test_export_with_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "run.csv");
        let record = record();

        let mut metadata = CsvMetadata::from_record(&record);
        metadata.add_custom("Note", "benchmark tuple");
        let exporter = CsvExporter::new(CsvConfig::default().with_metadata(metadata));
        exporter.export_solution(&record, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Convection-Diffusion Solution"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("# Scheme: Central Differencing Scheme"));
        assert!(content.contains("# Solver: Steady TDMA"));
        assert!(content.contains("# Gridpoints: 5"));
        assert!(content.contains("# Note: benchmark tuple"));
        assert!(content.contains("#\nx,numerical_phi,analytical_phi"));
    }

    #[test]
    fn test_european_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "run.csv");

        CsvExporter::new(CsvConfig::european().precision(2))
            .export_solution(&record(), &path)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("x;numerical_phi;analytical_phi"));
        assert!(content.contains("0,00;100,00;100,00"));
    }

    #[test]
    fn test_colliding_separators_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "run.csv");

        let exporter = CsvExporter::new(CsvConfig::default().decimal_separator(','));
        let err = exporter.export_solution(&record(), &path).unwrap_err();

        assert!(matches!(err, CsvError::InvalidConfig(_)));
    }

    #[test]
    fn test_non_finite_data_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "run.csv");

        let mut record = record();
        record.numerical_phi[2] = f64::NAN;

        let err = CsvExporter::default().export_solution(&record, &path).unwrap_err();
        assert!(matches!(err, CsvError::NonFinite { column: "numerical_phi", row: 2 }));
    }

    #[test]
    fn test_export_sweep_skips_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "sweep.csv");

        let outcomes = ParameterSweep::new(DomainParameters::default())
            .schemes(&[Scheme::Uds, Scheme::Plds])
            .gridpoints(&[1, 10])
            .run();

        CsvExporter::default().export_sweep(&outcomes, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "scheme,velocity,gridpoints,local_pe,global_pe,error");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("UDS,1.000000,10,0.100000,1.000000,"));
        assert!(lines[2].starts_with("PLDS,"));
    }

    #[test]
    fn test_empty_sweep_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "sweep.csv");

        let err = CsvExporter::default().export_sweep(&[], &path).unwrap_err();
        assert!(matches!(err, CsvError::EmptyData(_)));
    }
}
