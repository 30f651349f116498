//! Central Differencing Scheme (CDS)
//!
//! # Mathematical Background
//!
//! The face value of φ is the average of its two neighbours, which gives
//! second-order accuracy:
//!
//! ```text
//! D = Γ/dx,  F = ρu
//! a = 2D
//! b = D - F/2
//! c = D + F/2
//! ```
//!
//! # Limitations
//!
//! For `|Pe_local| > 2` one neighbour weight turns negative and the solution
//! oscillates between nodes. That is the known behaviour of the scheme and is
//! reproduced as is.

use super::traits::{CoefficientSet, DifferencingScheme, SchemeInputs};

/// Central differencing of the convective flux
#[derive(Debug, Clone, Copy, Default)]
pub struct CentralDifferencing;

impl CentralDifferencing {
    pub fn new() -> Self {
        Self
    }
}

impl DifferencingScheme for CentralDifferencing {
    fn coefficients(&self, inputs: &SchemeInputs) -> CoefficientSet {
        let d = inputs.diffusion();
        let f = inputs.convection();

        CoefficientSet::new(2.0 * d, d - 0.5 * f, d + 0.5 * f)
    }

    fn acronym(&self) -> &'static str {
        "CDS"
    }

    fn name(&self) -> &'static str {
        "Central Differencing Scheme"
    }
}
