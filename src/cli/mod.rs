//! Subcommands and shared helpers of the `convdiff` binary

pub mod interactive;
pub mod solve;
pub mod sweep;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

use convdiff_rs::output::{plot_solution, CsvConfig, CsvExporter, CsvMetadata, Exporter};
use convdiff_rs::solver::SolutionRecord;

/// Pick the log level: `flag` first, then `env` (`RUST_LOG`), then `info`
///
/// Unparsable values fall through to the next source.
pub fn resolve_level(flag: Option<&str>, env: Option<String>) -> LevelFilter {
    flag.and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| env.and_then(|v| v.parse::<LevelFilter>().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Initialize the logger
///
/// See [`resolve_level`] for the level. Logs go to stderr so they never mix
/// with prompts and reports on stdout.
pub fn init_logging(level: Option<&str>) {
    let log_level = resolve_level(level, std::env::var("RUST_LOG").ok());

    Builder::new()
        .filter_level(log_level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log::debug!("logging initialized (level: {})", log_level.to_string().to_uppercase());
}

/// Image format of written plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlotFormat {
    Png,
    Svg,
}

impl PlotFormat {
    pub fn extension(self) -> &'static str {
        match self {
            PlotFormat::Png => "png",
            PlotFormat::Svg => "svg",
        }
    }
}

/// Convert a path for the output layer, which takes `&str`
pub fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("output path is not valid UTF-8: {}", path.display()))
}

/// Write `solution.csv` and `solution.<ext>` for one record into `dir`
///
/// Returns the plot path.
pub fn write_record(record: &SolutionRecord, dir: &Path, format: PlotFormat) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;

    let csv_path = dir.join("solution.csv");
    let exporter = CsvExporter::new(CsvConfig::default().with_metadata(CsvMetadata::from_record(record)));
    exporter
        .export_solution(record, path_str(&csv_path)?)
        .with_context(|| format!("cannot write {}", csv_path.display()))?;

    let plot_path = dir.join(format!("solution.{}", format.extension()));
    plot_solution(record, path_str(&plot_path)?, None)
        .map_err(|e| anyhow!("cannot draw {}: {e}", plot_path.display()))?;

    Ok(plot_path)
}

/// Summary printed after a solve
pub fn report(record: &SolutionRecord, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Scheme:            {}", record.scheme.description())?;
    writeln!(out, "Velocity:          {} m/s", record.parameters.velocity)?;
    writeln!(out, "Density:           {} kg/m³", record.parameters.density)?;
    writeln!(out, "Gamma:             {}", record.parameters.gamma)?;
    writeln!(out, "Gridpoints:        {}", record.len())?;
    writeln!(out, "Local Peclet:      {:.4}", record.local_peclet)?;
    writeln!(out, "Global Peclet:     {:.4}", record.global_peclet)?;
    writeln!(out, "Relative error:    {:.6} %", record.error)?;

    if let Some(micros) = record
        .get_metadata("solve time (us)")
        .and_then(|v| v.parse::<f64>().ok())
    {
        writeln!(out, "Solve time:        {:.6} s", micros * 1e-6)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use convdiff_rs::prelude::*;

    #[test]
    fn test_report_lists_error_and_peclet() {
        let scenario = Scenario::new(DomainParameters::default().velocity(2.0).gridpoints(5), Scheme::Cds).unwrap();
        let record = SteadyStateSolver::new().solve(&scenario).unwrap();

        let mut out = Vec::new();
        report(&record, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Central Differencing Scheme"));
        assert!(text.contains("Local Peclet:      0.4000"));
        assert!(text.contains("Relative error:"));
    }

    #[test]
    fn test_report_lists_properties_and_time() {
        let params = DomainParameters::default().density(1.5).gamma(0.25);
        let mut record = SteadyStateSolver::new().solve(&Scenario::new(params, Scheme::Uds).unwrap()).unwrap();
        record.add_metadata("solve time (us)", "1500");

        let mut out = Vec::new();
        report(&record, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Density:           1.5 kg/m³"));
        assert!(text.contains("Gamma:             0.25"));
        assert!(text.contains("Solve time:        0.001500 s"));
    }

    #[test]
    fn test_flag_wins_over_environment() {
        assert_eq!(resolve_level(Some("warn"), Some("debug".to_string())), LevelFilter::Warn);
    }

    #[test]
    fn test_environment_used_without_flag() {
        assert_eq!(resolve_level(None, Some("debug".to_string())), LevelFilter::Debug);
        assert_eq!(resolve_level(Some("loud"), Some("trace".to_string())), LevelFilter::Trace);
    }

    #[test]
    fn test_level_defaults_to_info() {
        assert_eq!(resolve_level(None, None), LevelFilter::Info);
        assert_eq!(resolve_level(None, Some("verbose".to_string())), LevelFilter::Info);
    }

    #[test]
    fn test_plot_format_extension() {
        assert_eq!(PlotFormat::Png.extension(), "png");
        assert_eq!(PlotFormat::Svg.extension(), "svg");
    }
}
