//! Concrete implementations of the [`Solver`](crate::solver::Solver) trait
//!
//! # Available Methods
//!
//! - **[`SteadyStateSolver`]**: coefficient assembly, one Thomas sweep and
//!   comparison with the analytical profile
//!   - Cost: O(N) for the sweep, O(50·N) for the reference profile
//!   - Deterministic: the same scenario gives bit-identical records
//!
//! Each solver is stateless and can be shared between threads.

pub mod steady;

pub use steady::SteadyStateSolver;
