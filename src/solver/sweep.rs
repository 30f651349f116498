//! Parameter sweeps over schemes, velocities and grid sizes
//!
//! A [`ParameterSweep`] is the cartesian product
//!
//! ```text
//! schemes × velocities × gridpoints
//! ```
//!
//! applied on top of one set of base parameters. Points are expanded in a
//! fixed order (scheme first, then velocity, then gridpoints) and outcomes
//! come back in that same order, whether the sweep ran sequentially or on
//! rayon.
//!
//! A failing point does not stop the sweep: its [`SweepOutcome`] carries the
//! error instead of a record.
//!
//! # Example
//!
//! ```rust
//! use convdiff_rs::physics::DomainParameters;
//! use convdiff_rs::schemes::Scheme;
//! use convdiff_rs::solver::ParameterSweep;
//!
//! let sweep = ParameterSweep::new(DomainParameters::default())
//!     .schemes(&[Scheme::Cds, Scheme::Uds])
//!     .velocities(&[1.0, 2.0])
//!     .gridpoints(&[10, 20]);
//!
//! assert_eq!(sweep.len(), 8);
//!
//! let outcomes = sweep.run();
//! assert!(outcomes.iter().all(|o| o.is_success()));
//! assert_eq!(outcomes[0].point.relative_path(), "CDS/u_1/N_10");
//! ```

use std::path::PathBuf;

use crate::error::{ConvDiffError, Result};
use crate::physics::DomainParameters;
use crate::schemes::Scheme;
use crate::solver::{Scenario, SolutionRecord, Solver, SteadyStateSolver};

// =================================================================================================
// Sweep Point
// =================================================================================================

/// One combination of the sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub scheme: Scheme,
    pub velocity: f64,
    pub gridpoints: usize,
}

impl SweepPoint {
    /// Output location relative to the sweep root, `<SCHEME>/u_<v>/N_<n>`
    pub fn relative_path(&self) -> String {
        format!("{}/u_{}/N_{}", self.scheme, self.velocity, self.gridpoints)
    }

    /// [`relative_path`](Self::relative_path) joined onto `root`
    pub fn output_dir(&self, root: impl Into<PathBuf>) -> PathBuf {
        let mut dir = root.into();
        dir.push(self.scheme.acronym());
        dir.push(format!("u_{}", self.velocity));
        dir.push(format!("N_{}", self.gridpoints));
        dir
    }
}

// =================================================================================================
// Sweep Outcome
// =================================================================================================

/// Result of one sweep point
#[derive(Debug)]
pub struct SweepOutcome {
    pub point: SweepPoint,
    pub result: Result<SolutionRecord>,
}

impl SweepOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Record, if the point solved
    pub fn record(&self) -> Option<&SolutionRecord> {
        self.result.as_ref().ok()
    }

    /// Error, if the point failed
    pub fn error(&self) -> Option<&ConvDiffError> {
        self.result.as_ref().err()
    }
}

// =================================================================================================
// Parameter Sweep
// =================================================================================================

/// Cartesian sweep over schemes, velocities and grid sizes
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSweep {
    base: DomainParameters,
    schemes: Vec<Scheme>,
    velocities: Vec<f64>,
    gridpoints: Vec<usize>,
}

impl ParameterSweep {
    /// Sweep of every scheme at the base velocity and grid size
    pub fn new(base: DomainParameters) -> Self {
        Self {
            base,
            schemes: Scheme::ALL.to_vec(),
            velocities: vec![base.velocity],
            gridpoints: vec![base.gridpoints],
        }
    }

    pub fn schemes(mut self, schemes: &[Scheme]) -> Self {
        self.schemes = schemes.to_vec();
        self
    }

    pub fn velocities(mut self, velocities: &[f64]) -> Self {
        self.velocities = velocities.to_vec();
        self
    }

    pub fn gridpoints(mut self, gridpoints: &[usize]) -> Self {
        self.gridpoints = gridpoints.to_vec();
        self
    }

    /// Parameters shared by every point
    pub fn base(&self) -> &DomainParameters {
        &self.base
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.schemes.len() * self.velocities.len() * self.gridpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points in sweep order
    pub fn points(&self) -> Vec<SweepPoint> {
        let mut points = Vec::with_capacity(self.len());

        for &scheme in &self.schemes {
            for &velocity in &self.velocities {
                for &gridpoints in &self.gridpoints {
                    points.push(SweepPoint {
                        scheme,
                        velocity,
                        gridpoints,
                    });
                }
            }
        }

        points
    }

    /// Solve a single point
    pub fn solve_point(&self, point: &SweepPoint) -> Result<SolutionRecord> {
        let parameters = self.base.velocity(point.velocity).gridpoints(point.gridpoints);
        let scenario = Scenario::new(parameters, point.scheme)?;
        SteadyStateSolver::new().solve(&scenario)
    }

    /// Run every point
    ///
    /// With the `parallel` feature, sweeps of at least
    /// [`parallel_threshold()`](crate::solver::parallel_threshold) points run
    /// on the rayon pool.
    pub fn run(&self) -> Vec<SweepOutcome> {
        let points = self.points();

        log::info!(
            "running sweep of {} points ({} schemes, {} velocities, {} grids)",
            points.len(),
            self.schemes.len(),
            self.velocities.len(),
            self.gridpoints.len()
        );

        let outcomes = self.run_points(points);

        let failures = outcomes.iter().filter(|o| !o.is_success()).count();
        if failures > 0 {
            log::warn!("{failures} of {} sweep points failed", outcomes.len());
        }

        outcomes
    }

    #[cfg(feature = "parallel")]
    fn run_points(&self, points: Vec<SweepPoint>) -> Vec<SweepOutcome> {
        use rayon::prelude::*;

        if points.len() >= crate::solver::parallel_threshold() {
            log::debug!("sweep dispatched to rayon");
            points.into_par_iter().map(|point| self.outcome(point)).collect()
        } else {
            points.into_iter().map(|point| self.outcome(point)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run_points(&self, points: Vec<SweepPoint>) -> Vec<SweepOutcome> {
        points.into_iter().map(|point| self.outcome(point)).collect()
    }

    fn outcome(&self, point: SweepPoint) -> SweepOutcome {
        let result = self.solve_point(&point);

        if let Err(err) = &result {
            log::debug!("sweep point {} failed: {err}", point.relative_path());
        }

        SweepOutcome { point, result }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ThresholdGuard;

    fn sweep() -> ParameterSweep {
        ParameterSweep::new(DomainParameters::default())
            .schemes(&[Scheme::Uds, Scheme::Cds])
            .velocities(&[1.0, -2.5])
            .gridpoints(&[5, 10, 20])
    }

    #[test]
    fn test_default_sweep_covers_all_schemes() {
        let points = ParameterSweep::new(DomainParameters::default()).points();
        let schemes: Vec<_> = points.iter().map(|p| p.scheme).collect();
        assert_eq!(schemes, Scheme::ALL.to_vec());
    }

    #[test]
    fn test_point_order_is_scheme_velocity_gridpoints() {
        let points = sweep().points();

        assert_eq!(points.len(), 12);
        assert_eq!(points[0], SweepPoint { scheme: Scheme::Uds, velocity: 1.0, gridpoints: 5 });
        assert_eq!(points[2], SweepPoint { scheme: Scheme::Uds, velocity: 1.0, gridpoints: 20 });
        assert_eq!(points[3], SweepPoint { scheme: Scheme::Uds, velocity: -2.5, gridpoints: 5 });
        assert_eq!(points[6].scheme, Scheme::Cds);
    }

    #[test]
    fn test_relative_path() {
        let point = SweepPoint { scheme: Scheme::Plds, velocity: 2.5, gridpoints: 40 };
        assert_eq!(point.relative_path(), "PLDS/u_2.5/N_40");
        assert_eq!(point.output_dir("Plots"), PathBuf::from("Plots/PLDS/u_2.5/N_40"));
    }

    #[test]
    fn test_failures_are_reported_per_point() {
        let outcomes = ParameterSweep::new(DomainParameters::default())
            .schemes(&[Scheme::Cds])
            .gridpoints(&[1, 10])
            .run();

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0].error(), Some(ConvDiffError::InvalidParameter { .. })));
        assert!(outcomes[1].is_success());
    }

    #[test]
    fn test_outcomes_follow_point_order() {
        let sweep = sweep();
        let outcomes = sweep.run();

        for (outcome, point) in outcomes.iter().zip(sweep.points()) {
            assert_eq!(outcome.point, point);
            let record = outcome.record().unwrap();
            assert_eq!(record.scheme, point.scheme);
            assert_eq!(record.len(), point.gridpoints);
        }
    }

    #[test]
    fn test_low_threshold_gives_same_results() {
        let sequential: Vec<f64> = sweep().run().iter().map(|o| o.record().unwrap().error).collect();

        let _guard = ThresholdGuard::save(1);
        let dispatched: Vec<f64> = sweep().run().iter().map(|o| o.record().unwrap().error).collect();

        assert_eq!(sequential, dispatched);
    }

    #[test]
    fn test_empty_sweep() {
        let sweep = ParameterSweep::new(DomainParameters::default()).velocities(&[]);
        assert!(sweep.is_empty());
        assert!(sweep.run().is_empty());
    }
}
