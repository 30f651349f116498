//! Upwind Differencing Scheme (UDS)
//!
//! The face value of φ is taken from the upstream node:
//!
//! ```text
//! D = Γ/dx,  F = ρu
//! a = 2D + max(F, 0) + max(-F, 0)
//! b = D + max(-F, 0)
//! c = D + max(F, 0)
//! ```
//!
//! Both neighbour weights are always non-negative, so the solution stays
//! bounded for any Péclet number at the price of first-order accuracy and
//! extra numerical diffusion.

use super::traits::{CoefficientSet, DifferencingScheme, SchemeInputs};

/// First-order upwind differencing of the convective flux
#[derive(Debug, Clone, Copy, Default)]
pub struct UpwindDifferencing;

impl UpwindDifferencing {
    pub fn new() -> Self {
        Self
    }
}

impl DifferencingScheme for UpwindDifferencing {
    fn coefficients(&self, inputs: &SchemeInputs) -> CoefficientSet {
        let d = inputs.diffusion();
        let f = inputs.convection();

        CoefficientSet::new(
            2.0 * d + f.max(0.0) + (-f).max(0.0),
            d + (-f).max(0.0),
            d + f.max(0.0),
        )
    }

    fn acronym(&self) -> &'static str {
        "UDS"
    }

    fn name(&self) -> &'static str {
        "Upwind Differencing Scheme"
    }
}
