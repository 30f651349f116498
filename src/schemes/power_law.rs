//! Power-Law Differencing Scheme (PLDS)
//!
//! # Mathematical Background
//!
//! Patankar's power law approximates the exact exponential scheme by damping
//! the diffusive conductance with the cell Péclet number:
//!
//! ```text
//! D = Γ/dx,  F = ρu
//! pl = max((1 - 0.1·|Pe_local|)^5, 0)
//! b  = D·pl + max(-F, 0)
//! c  = D·pl + max(F, 0)
//! a  = b + c
//! ```
//!
//! - `Pe_local = 0`: `pl = 1`, identical to central/upwind for pure diffusion
//! - `|Pe_local| ≥ 10`: `pl = 0`, diffusion is dropped and the flux is fully
//!   upwinded

use super::traits::{CoefficientSet, DifferencingScheme, SchemeInputs};

/// Power-law damping factor `max((1 - 0.1·|Pe|)^5, 0)`
pub fn power_law_factor(local_peclet: f64) -> f64 {
    (1.0 - 0.1 * local_peclet.abs()).powi(5).max(0.0)
}

/// Power-law differencing of the convective flux
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerLawDifferencing;

impl PowerLawDifferencing {
    pub fn new() -> Self {
        Self
    }
}

impl DifferencingScheme for PowerLawDifferencing {
    fn coefficients(&self, inputs: &SchemeInputs) -> CoefficientSet {
        let damped = inputs.diffusion() * power_law_factor(inputs.local_peclet);
        let f = inputs.convection();

        let b = damped + (-f).max(0.0);
        let c = damped + f.max(0.0);

        CoefficientSet::new(b + c, b, c)
    }

    fn acronym(&self) -> &'static str {
        "PLDS"
    }

    fn name(&self) -> &'static str {
        "Power Law Differencing Scheme"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factor_limits() {
        assert_eq!(power_law_factor(0.0), 1.0);
        assert_eq!(power_law_factor(10.0), 0.0);
        assert_eq!(power_law_factor(-10.0), 0.0);
        assert_relative_eq!(power_law_factor(5.0), 0.5f64.powi(5), epsilon = 1e-15);
    }

    #[test]
    fn test_factor_floors_at_zero_beyond_cutoff() {
        // (1 - 0.1 * 15)^5 = (-0.5)^5 < 0 without the floor
        assert_eq!(power_law_factor(15.0), 0.0);
        assert_eq!(power_law_factor(-250.0), 0.0);
    }

    #[test]
    fn test_factor_is_symmetric() {
        for pe in [0.3, 2.0, 7.5] {
            assert_eq!(power_law_factor(pe), power_law_factor(-pe));
        }
    }

    #[test]
    fn test_fully_upwinded_at_high_peclet() {
        // Pe_local = 10, F = 25
        let set = PowerLawDifferencing.coefficients(&SchemeInputs::new(0.5, 0.2, 0.5, 50.0));

        assert_eq!(set.b, 0.0);
        assert_relative_eq!(set.c, 25.0, epsilon = 1e-12);
        assert_relative_eq!(set.a, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_textbook_coefficients() {
        // D = 2.5, F = 1.0, Pe = 0.4
        let set = PowerLawDifferencing.coefficients(&SchemeInputs::new(0.5, 0.2, 0.5, 2.0));
        let damped = 2.5 * 0.96f64.powi(5);

        assert_relative_eq!(set.b, damped, epsilon = 1e-12);
        assert_relative_eq!(set.c, damped + 1.0, epsilon = 1e-12);
        assert_relative_eq!(set.a, 2.0 * damped + 1.0, epsilon = 1e-12);
    }
}
