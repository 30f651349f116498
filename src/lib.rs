//! convdiff-rs: Steady 1D Convection-Diffusion Solver
//!
//! Discretizes the steady convection-diffusion balance on a uniform 1D grid
//! with a choice of convection schemes, solves the tridiagonal system with the
//! Thomas algorithm and compares the result with the closed-form solution.
//!
//! # Architecture
//!
//! convdiff-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - The domain and the analytical profile define the problem (what to solve)
//!    - Schemes and the Thomas solver provide the method (how to solve)
//!
//! 2. **Pure, typed operations**
//!    - Every run is a fresh, immutable [`solver::SolutionRecord`]
//!    - Every failure is a [`ConvDiffError`] variant
//!
//! # Quick Start
//!
//! ```rust
//! use convdiff_rs::prelude::*;
//!
//! # fn main() -> convdiff_rs::Result<()> {
//! // 1. Describe the problem
//! let params = DomainParameters::default().velocity(2.0).gridpoints(5);
//! let scenario = Scenario::new(params, Scheme::Uds)?;
//!
//! // 2. Solve
//! let record = SteadyStateSolver::new().solve(&scenario)?;
//!
//! // 3. Access results
//! println!("Local Péclet number: {:.3}", record.local_peclet);
//! println!("Relative error: {:.4} %", record.error);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Domain, grid and analytical solution
//! - [`schemes`]: Convection differencing schemes (CDS, UDS, PLDS)
//! - [`solver`]: Thomas algorithm, error metric, steady solver and sweeps
//! - [`output`]: Plots and CSV export

// Core modules
pub mod error;
pub mod physics;
pub mod schemes;
pub mod solver;

pub mod output;

pub use error::{ConvDiffError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use convdiff_rs::prelude::*;
    //! ```
    pub use crate::error::{ConvDiffError, Result};
    pub use crate::physics::{Domain, DomainParameters, Grid};
    pub use crate::schemes::{CoefficientSet, DifferencingScheme, Scheme, SchemeInputs};
    pub use crate::solver::{
        ParameterSweep, RunConfiguration, Scenario, SolutionRecord, Solver, SteadyStateSolver,
        SweepOutcome, SweepPoint,
    };
}
