//! Tridiagonal Matrix Algorithm (Thomas algorithm)
//!
//! # Mathematical Background
//!
//! For uniform weights and Dirichlet values at both ends, every interior node
//! satisfies
//!
//! ```text
//! a · φ_i = b · φ_{i+1} + c · φ_{i-1},    i = 1 .. N-2
//! φ_0 = φ₀,   φ_{N-1} = φ_L
//! ```
//!
//! Forward elimination writes each node in terms of its right neighbour,
//! `φ_i = P_i · φ_{i+1} + Q_i`:
//!
//! ```text
//! P_0 = 0,  Q_0 = φ₀
//! P_i = b / (a - c·P_{i-1})
//! Q_i = c·Q_{i-1} / (a - c·P_{i-1})
//! ```
//!
//! and back substitution recovers φ from the outlet towards the inlet.
//!
//! # Characteristics
//!
//! - **Exact**: direct solve, no iteration or residual
//! - **Complexity**: O(N) time, O(N) auxiliary storage
//! - **Boundaries**: `φ_0` and `φ_{N-1}` are copied, never computed
//!
//! # Singularity
//!
//! The pivot `a - c·P_{i-1}` is checked against the magnitude of its operands.
//! A pivot that cancels to round-off, or any non-finite value, stops the
//! sweep with [`ConvDiffError::NumericalSingularity`] instead of letting NaN or
//! infinity reach the profile.

use nalgebra::DVector;

use crate::error::{ConvDiffError, Result};
use crate::schemes::CoefficientSet;

/// Relative size below which a pivot counts as zero
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Forward-elimination coefficients together with the solved profile
#[derive(Debug, Clone, PartialEq)]
pub struct ThomasSweep {
    /// Elimination coefficients `P_i`
    pub p: DVector<f64>,

    /// Elimination coefficients `Q_i`
    pub q: DVector<f64>,

    /// Solved φ, boundaries included
    pub phi: DVector<f64>,
}

/// Solve the uniform tridiagonal system with Dirichlet ends
///
/// # Arguments
///
/// * `coefficients` - Uniform weights `(a, b, c)`
/// * `inlet_bc` - φ at node 0
/// * `outlet_bc` - φ at node `nodes - 1`
/// * `nodes` - Number of nodes N, boundaries included
///
/// # Errors
///
/// - [`ConvDiffError::InvalidParameter`] if `nodes < 2`
/// - [`ConvDiffError::NumericalSingularity`] on a vanishing pivot or a
///   non-finite intermediate value
///
/// # Example
///
/// ```rust
/// use convdiff_rs::schemes::CoefficientSet;
/// use convdiff_rs::solver::tdma::solve;
///
/// // Pure diffusion: straight line between the boundaries
/// let sweep = solve(&CoefficientSet::new(2.0, 1.0, 1.0), 1.0, 0.0, 5)?;
/// let phi = sweep.phi.as_slice();
///
/// assert_eq!(phi[0], 1.0);
/// assert_eq!(phi[4], 0.0);
/// assert!((phi[2] - 0.5).abs() < 1e-12);
/// # Ok::<(), convdiff_rs::ConvDiffError>(())
/// ```
pub fn solve(coefficients: &CoefficientSet, inlet_bc: f64, outlet_bc: f64, nodes: usize) -> Result<ThomasSweep> {
    if nodes < 2 {
        return Err(ConvDiffError::invalid_parameter(
            "gridpoints",
            format!("the Thomas sweep needs at least 2 nodes, got {nodes}"),
        ));
    }

    let CoefficientSet { a, b, c } = *coefficients;
    let last = nodes - 1;

    // ====== Boundary rows ======

    let mut p = DVector::<f64>::zeros(nodes);
    let mut q = DVector::<f64>::zeros(nodes);
    q[0] = inlet_bc;
    q[last] = outlet_bc;

    // ====== Forward elimination ======

    for i in 1..last {
        let coupling = c * p[i - 1];
        let pivot = a - coupling;

        let scale = a.abs().max(coupling.abs());
        if !pivot.is_finite() || pivot.abs() <= PIVOT_TOLERANCE * scale {
            return Err(ConvDiffError::NumericalSingularity { node: i, pivot });
        }

        p[i] = b / pivot;
        q[i] = c * q[i - 1] / pivot;
    }

    // ====== Back substitution ======

    let mut phi = DVector::<f64>::zeros(nodes);
    phi[last] = outlet_bc;

    for i in (0..last).rev() {
        phi[i] = p[i] * phi[i + 1] + q[i];
    }

    if let Some(node) = phi.iter().position(|v| !v.is_finite()) {
        return Err(ConvDiffError::NumericalSingularity {
            node,
            pivot: phi[node],
        });
    }

    log::trace!("thomas sweep solved {nodes} nodes");

    Ok(ThomasSweep { p, q, phi })
}

// =================================================================================================
// Tests
// =================================================================================================
