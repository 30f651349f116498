//! Numerical solvers
//!
//! This module turns a validated problem into a discrete profile and compares
//! it with the closed-form solution.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Validated domain (parameters, grid, Péclet numbers)
//!    - Differencing scheme
//!
//! 2. **Configuration** (`RunConfiguration`) - the serializable request
//!    - One JSON record per run, defaults for missing fields
//!    - `validate()` is the only way to a `Scenario`
//!
//! 3. **Solver** (`Solver` trait) - the numerical method
//!    - Builds coefficients, runs the Thomas sweep, evaluates the error
//!    - Returns an immutable `SolutionRecord`
//!
//! # Module Organization
//!
//! - **`tdma`**: Thomas algorithm for the uniform tridiagonal system
//! - **`metrics`**: signed relative error against the analytical profile
//! - **`scenario`**, **`configuration`**: problem definition
//! - **`result`**: `SolutionRecord`
//! - **`methods`**: `SteadyStateSolver`
//! - **`sweep`**: `ParameterSweep` over schemes, velocities and grid sizes
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌────────────────────┐
//! │  RunConfiguration  │  (JSON / CLI flags)
//! └─────────┬──────────┘
//!           │ validate()
//! ┌─────────▼──────────┐
//! │ Scenario           │ ← WHAT to solve
//! │ (domain + scheme)  │
//! └─────────┬──────────┘
//!           │
//! ┌─────────▼──────────┐
//! │ SteadyStateSolver  │ ← coefficients → TDMA → analytical → error
//! └─────────┬──────────┘
//!           │
//! ┌─────────▼──────────┐
//! │ SolutionRecord     │ ← the solution
//! └────────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use convdiff_rs::solver::{RunConfiguration, Solver, SteadyStateSolver};
//!
//! let config = RunConfiguration::from_json_str(r#"{"scheme": "UDS", "velocity": 2.0}"#)?;
//! let scenario = config.validate()?;
//! let record = SteadyStateSolver::new().solve(&scenario)?;
//!
//! println!("error = {:.4} %, Pe_local = {:.3}", record.error, record.local_peclet);
//! # Ok::<(), convdiff_rs::ConvDiffError>(())
//! ```
//!
//! # Error Handling
//!
//! Every operation returns [`crate::Result`]. Common failures:
//! - Invalid parameters (`N < 2`, `L ≤ 0`, `Γ ≤ 0`, non-finite values)
//! - Unknown scheme acronym
//! - Vanishing pivot in the Thomas sweep
//! - Zero analytical sample in the error metric

// =================================================================================================
// Module Declarations
// =================================================================================================
pub mod configuration;
pub mod methods;
pub mod metrics;
pub mod result;
pub mod scenario;
pub mod sweep;
pub mod tdma;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without a mutex on every sweep.
// Relaxed ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of sweep points from which [`ParameterSweep::run()`]
/// dispatches to rayon.
const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Sweeps with fewer points run sequentially. Larger ones use rayon, but
/// only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use convdiff_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use convdiff_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(64);
/// assert_eq!(parallel_threshold(), 64);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Guards are serialized through a lock so
/// concurrently running tests never observe each other's value.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Runs before the lock field is released.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use configuration::RunConfiguration;
pub use methods::SteadyStateSolver;
pub use result::SolutionRecord;
pub use scenario::Scenario;
pub use sweep::{ParameterSweep, SweepOutcome, SweepPoint};
pub use tdma::ThomasSweep;
pub use traits::Solver;

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::{ConvDiffError, Result};

/// Validate a profile for numerical issues
///
/// Checks that `values` contains neither NaN nor infinity. The offending
/// index is reported as the node of a [`ConvDiffError::NumericalSingularity`].
///
/// # Example
///
/// ```rust,ignore
/// validate_profile(sweep.phi.as_slice(), "numerical_phi")?;
/// ```
pub(crate) fn validate_profile(values: &[f64], label: &str) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(node) => {
            log::warn!("non-finite value in {label} at node {node}: {}", values[node]);
            Err(ConvDiffError::NumericalSingularity {
                node,
                pivot: values[node],
            })
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
