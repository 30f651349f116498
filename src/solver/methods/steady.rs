//! Direct steady-state solver
//!
//! # Algorithm
//!
//! 1. Derive the scheme inputs `(Γ, dx, ρ, u, Pe_local)` from the domain
//! 2. Build the uniform weights `(a, b, c)` with the scenario's scheme
//! 3. Solve the tridiagonal system with the Thomas algorithm
//! 4. Sample the analytical profile on the refined reference grid
//! 5. Compute the signed relative error
//!
//! There is no iteration: the system is linear with constant weights, so a
//! single Thomas sweep is exact up to round-off.
//!
//! # Example
//!
//! ```rust
//! use convdiff_rs::physics::DomainParameters;
//! use convdiff_rs::schemes::Scheme;
//! use convdiff_rs::solver::{Scenario, Solver, SteadyStateSolver};
//!
//! let params = DomainParameters::default().velocity(2.0).gridpoints(5);
//! let scenario = Scenario::new(params, Scheme::Cds)?;
//! let record = SteadyStateSolver::new().solve(&scenario)?;
//!
//! assert_eq!(record.numerical_phi[0], 100.0);
//! assert_eq!(record.numerical_phi[4], 20.0);
//! assert_eq!(record.analytical_phi.len(), 250);
//! # Ok::<(), convdiff_rs::ConvDiffError>(())
//! ```

use std::collections::HashMap;
use std::time::Instant;

use crate::error::Result;
use crate::physics::analytical::{self, REFINEMENT_FACTOR};
use crate::schemes::SchemeInputs;
use crate::solver::{metrics, tdma, validate_profile, Scenario, SolutionRecord, Solver};

// =================================================================================================
// Steady-State Solver
// =================================================================================================

/// Discretize-and-solve for the steady convection-diffusion balance
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyStateSolver;

impl SteadyStateSolver {
    /// Create a new steady solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use convdiff_rs::solver::{Solver, SteadyStateSolver};
    ///
    /// let solver = SteadyStateSolver::new();
    /// assert_eq!(solver.name(), "Steady TDMA");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for SteadyStateSolver {
    fn solve(&self, scenario: &Scenario) -> Result<SolutionRecord> {
        let started = Instant::now();
        let domain = &scenario.domain;
        let nodes = domain.gridpoints();

        // ====== Step 1: Coefficients ======

        let inputs = SchemeInputs::from(domain);
        let coefficients = scenario.scheme.coefficients(&inputs);

        log::debug!(
            "{}: a={:.6}, b={:.6}, c={:.6} (Pe_local={:.4})",
            scenario.scheme,
            coefficients.a,
            coefficients.b,
            coefficients.c,
            inputs.local_peclet
        );

        // ====== Step 2: Thomas sweep ======

        let sweep = tdma::solve(&coefficients, domain.inlet_bc(), domain.outlet_bc(), nodes)?;
        validate_profile(sweep.phi.as_slice(), "numerical_phi")?;

        log::debug!("{}: tridiagonal system solved on {} nodes", scenario.scheme, nodes);

        // ====== Step 3: Analytical reference ======

        let samples = REFINEMENT_FACTOR * nodes;
        let analytical_x = analytical::reference_grid(domain.length(), samples);
        let analytical_phi = analytical::evaluate(
            domain.inlet_bc(),
            domain.outlet_bc(),
            domain.global_peclet(),
            domain.length(),
            samples,
        )?;

        log::debug!("{}: analytical profile sampled at {} points", scenario.scheme, samples);

        // ====== Step 4: Error ======

        let error = metrics::relative_error_percent(
            sweep.phi.as_slice(),
            analytical_phi.as_slice(),
            domain.dx(),
            domain.length(),
        )?;

        // ====== Step 5: Build Result ======

        let mut record = SolutionRecord {
            scheme: scenario.scheme,
            parameters: *domain.parameters(),
            x: domain.grid().nodes().clone(),
            numerical_phi: sweep.phi.clone(),
            analytical_x,
            analytical_phi,
            local_peclet: domain.local_peclet(),
            global_peclet: domain.global_peclet(),
            error,
            coefficients,
            sweep,
            metadata: HashMap::new(),
        };

        let elapsed = started.elapsed();

        record.add_metadata("solver", self.name());
        record.add_metadata("scheme", scenario.scheme.description());
        record.add_metadata("gridpoints", &nodes.to_string());
        record.add_metadata("dx", &domain.dx().to_string());
        record.add_metadata("solve time (us)", &elapsed.as_micros().to_string());

        log::info!(
            "{} u={} N={}: error={:.6} %, Pe_local={:.4}",
            scenario.scheme,
            domain.velocity(),
            nodes,
            error,
            domain.local_peclet()
        );

        Ok(record)
    }

    fn name(&self) -> &'static str {
        "Steady TDMA"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
