//! Helper functions for integration tests

use convdiff_rs::physics::DomainParameters;
use convdiff_rs::schemes::Scheme;
use convdiff_rs::solver::{Scenario, SolutionRecord, Solver, SteadyStateSolver};

/// The textbook tuple: u = 2, ρ = 0.5, Γ = 0.5, L = 1, φ₀ = 100, φ_L = 20, N = 5
pub fn textbook_parameters() -> DomainParameters {
    DomainParameters::default()
        .velocity(2.0)
        .density(0.5)
        .gamma(0.5)
        .length(1.0)
        .boundaries(100.0, 20.0)
        .gridpoints(5)
}

/// Solve `parameters` with `scheme`, panicking on failure
pub fn solve(parameters: DomainParameters, scheme: Scheme) -> SolutionRecord {
    let scenario = Scenario::new(parameters, scheme).expect("valid scenario");
    SteadyStateSolver::new().solve(&scenario).expect("solvable scenario")
}

/// Whether `values` never increases
pub fn is_non_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] <= w[0])
}

/// Whether every value lies in `[low, high]`
pub fn is_within(values: &[f64], low: f64, high: f64) -> bool {
    values.iter().all(|v| (low..=high).contains(v))
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
