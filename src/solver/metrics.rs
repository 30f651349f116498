//! Accuracy metric of a numerical profile against the analytical reference
//!
//! ```text
//! error = Σ_i (dx / L) · 100 · (φ_num[i] - φ_an[50 i]) / φ_an[50 i]
//! ```
//!
//! The sum is signed: under- and overshoots cancel, and coarse grids or
//! oscillating schemes can give values of either sign. It is a percentage
//! weighted by cell fraction, not a norm.

use crate::error::{ConvDiffError, Result};
use crate::physics::analytical::REFINEMENT_FACTOR;

/// Signed, cell-weighted relative error in percent
///
/// # Arguments
///
/// * `numerical` - Profile at the N grid nodes
/// * `analytical` - Reference profile at `REFINEMENT_FACTOR · N` samples
/// * `dx` - Grid spacing
/// * `length` - Domain length
///
/// # Errors
///
/// - [`ConvDiffError::InvalidParameter`] if the sample counts do not align
/// - [`ConvDiffError::DomainError`] if a paired analytical sample is exactly
///   zero
pub fn relative_error_percent(numerical: &[f64], analytical: &[f64], dx: f64, length: f64) -> Result<f64> {
    if numerical.is_empty() || analytical.len() != REFINEMENT_FACTOR * numerical.len() {
        return Err(ConvDiffError::invalid_parameter(
            "analytical_phi",
            format!(
                "expected {} reference samples for {} nodes, got {}",
                REFINEMENT_FACTOR * numerical.len(),
                numerical.len(),
                analytical.len()
            ),
        ));
    }

    let weight = 100.0 * dx / length;
    let mut error = 0.0;

    for (i, phi) in numerical.iter().enumerate() {
        let reference = analytical[REFINEMENT_FACTOR * i];

        if reference == 0.0 {
            return Err(ConvDiffError::DomainError(format!(
                "analytical value is zero at node {i}; relative error is undefined"
            )));
        }

        error += weight * (phi - reference) / reference;
    }

    Ok(error)
}
