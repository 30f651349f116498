//! Result record of one solve-and-compare run

use std::collections::HashMap;

use nalgebra::DVector;

use crate::physics::analytical::REFINEMENT_FACTOR;
use crate::physics::DomainParameters;
use crate::schemes::{CoefficientSet, Scheme};
use crate::solver::tdma::ThomasSweep;

/// Outcome of a steady solve compared against the analytical profile
///
/// Built once by [`SteadyStateSolver`](crate::solver::SteadyStateSolver) and
/// never mutated afterwards, apart from free-form metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionRecord {
    /// Scheme used for the convective flux
    pub scheme: Scheme,

    /// Parameters of the run
    pub parameters: DomainParameters,

    /// Node positions (N values)
    pub x: DVector<f64>,

    /// Numerical φ at the nodes
    pub numerical_phi: DVector<f64>,

    /// Reference positions (`REFINEMENT_FACTOR · N` values)
    pub analytical_x: DVector<f64>,

    /// Analytical φ at the reference positions
    pub analytical_phi: DVector<f64>,

    /// Cell Péclet number
    pub local_peclet: f64,

    /// Domain Péclet number
    pub global_peclet: f64,

    /// Signed relative error in percent
    pub error: f64,

    /// Tridiagonal weights used
    pub coefficients: CoefficientSet,

    /// Elimination coefficients of the Thomas sweep
    pub sweep: ThomasSweep,

    /// Diagnostics (solver name, dx, timings, ...)
    pub metadata: HashMap<String, String>,
}

impl SolutionRecord {
    /// Number of grid nodes
    pub fn len(&self) -> usize {
        self.numerical_phi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numerical_phi.is_empty()
    }

    /// Analytical φ taken at the grid nodes only
    pub fn analytical_at_nodes(&self) -> Vec<f64> {
        self.analytical_phi
            .iter()
            .step_by(REFINEMENT_FACTOR)
            .copied()
            .collect()
    }

    /// Whether the numerical profile stays within the boundary values
    pub fn is_bounded(&self) -> bool {
        let low = self.parameters.inlet_bc.min(self.parameters.outlet_bc);
        let high = self.parameters.inlet_bc.max(self.parameters.outlet_bc);
        self.numerical_phi.iter().all(|v| (low..=high).contains(v))
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}
