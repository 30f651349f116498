//! Closed-form solution of steady 1D convection-diffusion
//!
//! # Mathematical Background
//!
//! With constant `ρ`, `u`, `Γ` and Dirichlet values at both ends:
//!
//! ```text
//! d(ρuφ)/dx = d/dx(Γ dφ/dx),   φ(0) = φ₀,   φ(L) = φ_L
//!
//! φ(x) = φ₀ + (exp(Pe·x/L) - 1) / (exp(Pe) - 1) · (φ_L - φ₀),   Pe = ρuL/Γ
//! ```
//!
//! The profile is sampled on a reference grid [`REFINEMENT_FACTOR`] times
//! finer than the numerical grid, so sample `REFINEMENT_FACTOR · i` sits on
//! numerical node `i`.
//!
//! # Evaluation
//!
//! - `|Pe| < PECLET_DEGENERACY_TOLERANCE`: the formula is `0/0`; the linear
//!   limit `φ₀ + (φ_L - φ₀)·x/L` is used instead.
//! - `Pe > 0`: numerator and denominator are scaled by `exp(-Pe)`,
//!
//!   ```text
//!   (exp(Pe·(x/L - 1)) - exp(-Pe)) / (1 - exp(-Pe))
//!   ```
//!
//!   evaluated with `exp_m1` on both terms. This stays finite when
//!   `exp(Pe)` would overflow.
//! - `Pe < 0`: the textbook form is already bounded.

use nalgebra::DVector;

use crate::error::{ConvDiffError, Result};

/// Reference samples per numerical node
pub const REFINEMENT_FACTOR: usize = 50;

/// Below this `|Pe|` the profile is treated as pure diffusion
pub const PECLET_DEGENERACY_TOLERANCE: f64 = 1e-12;

/// Analytical φ at a single position `x`
///
/// # Errors
///
/// [`ConvDiffError::DomainError`] if the exponential denominator vanishes
/// outside the pure-diffusion special case, or if `length <= 0`.
pub fn exact_value(inlet_bc: f64, outlet_bc: f64, global_peclet: f64, length: f64, x: f64) -> Result<f64> {
    if length <= 0.0 {
        return Err(ConvDiffError::DomainError(format!(
            "analytical profile needs a positive length, got {length}"
        )));
    }

    let xi = x / length;

    if global_peclet.abs() < PECLET_DEGENERACY_TOLERANCE {
        return Ok(inlet_bc + (outlet_bc - inlet_bc) * xi);
    }

    let (numerator, denominator) = if global_peclet > 0.0 {
        let decay = (-global_peclet).exp_m1();
        ((global_peclet * (xi - 1.0)).exp_m1() - decay, -decay)
    } else {
        ((global_peclet * xi).exp_m1(), global_peclet.exp_m1())
    };

    if denominator == 0.0 || !denominator.is_finite() {
        return Err(ConvDiffError::DomainError(format!(
            "exp(Pe) - 1 is singular for Pe = {global_peclet:e}"
        )));
    }

    Ok(inlet_bc + numerator / denominator * (outlet_bc - inlet_bc))
}

/// Positions `x_k = k · L / samples` for `k = 0 .. samples-1`
pub fn reference_grid(length: f64, samples: usize) -> DVector<f64> {
    DVector::from_fn(samples, |k, _| k as f64 * length / samples as f64)
}

/// Analytical φ on the reference grid of `samples` points spanning `[0, L)`
///
/// # Example
///
/// ```rust
/// use convdiff_rs::physics::analytical::evaluate;
///
/// // Pure diffusion: straight line from 100 to 20
/// let phi = evaluate(100.0, 20.0, 0.0, 1.0, 4)?;
/// assert_eq!(phi.as_slice(), &[100.0, 80.0, 60.0, 40.0]);
/// # Ok::<(), convdiff_rs::ConvDiffError>(())
/// ```
///
/// # Errors
///
/// Same as [`exact_value`].
pub fn evaluate(
    inlet_bc: f64,
    outlet_bc: f64,
    global_peclet: f64,
    length: f64,
    samples: usize,
) -> Result<DVector<f64>> {
    let x = reference_grid(length, samples);

    let values = x
        .iter()
        .map(|&xk| exact_value(inlet_bc, outlet_bc, global_peclet, length, xk))
        .collect::<Result<Vec<f64>>>()?;

    Ok(DVector::from_vec(values))
}

// =================================================================================================
// Tests
// =================================================================================================
