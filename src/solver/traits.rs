//! Numerical solver trait
//!
//! A solver takes a [`Scenario`] (WHAT to solve) and returns a
//! [`SolutionRecord`]. Solvers are stateless: the same instance may solve any
//! number of scenarios, from any number of threads.

use crate::error::Result;
use crate::solver::{Scenario, SolutionRecord};

/// Stable interface of every steady solver
///
/// # Examples
///
/// ```rust
/// use convdiff_rs::physics::DomainParameters;
/// use convdiff_rs::schemes::Scheme;
/// use convdiff_rs::solver::{Scenario, Solver, SteadyStateSolver};
///
/// let scenario = Scenario::new(DomainParameters::default(), Scheme::Uds)?;
/// let record = SteadyStateSolver::new().solve(&scenario)?;
///
/// assert_eq!(record.len(), 10);
/// # Ok::<(), convdiff_rs::ConvDiffError>(())
/// ```
pub trait Solver: Send + Sync {
    /// Solve `scenario` and compare with the analytical profile
    fn solve(&self, scenario: &Scenario) -> Result<SolutionRecord>;

    /// Solver name, recorded in the result metadata
    fn name(&self) -> &'static str;
}
