//! Differencing scheme traits and types
//!
//! - `DifferencingScheme`: trait implemented by every convection scheme
//! - `SchemeInputs`: the physical/grid scalars a scheme needs
//! - `CoefficientSet`: the uniform tridiagonal weights it produces

use crate::physics::Domain;

// =================================================================================================
// Scheme Inputs
// =================================================================================================

/// Scalars a differencing scheme depends on
///
/// All of them are uniform over the domain, so a scheme returns one
/// [`CoefficientSet`] valid at every interior node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeInputs {
    /// Diffusion coefficient Γ
    pub gamma: f64,

    /// Grid spacing
    pub dx: f64,

    /// Fluid density ρ
    pub density: f64,

    /// Fluid velocity u
    pub velocity: f64,

    /// Cell Péclet number `ρ u dx / Γ`
    pub local_peclet: f64,
}

impl SchemeInputs {
    /// Build inputs from raw values, deriving the local Péclet number
    pub fn new(gamma: f64, dx: f64, density: f64, velocity: f64) -> Self {
        Self {
            gamma,
            dx,
            density,
            velocity,
            local_peclet: density * velocity * dx / gamma,
        }
    }

    /// Diffusive conductance `D = Γ / dx`
    pub fn diffusion(&self) -> f64 {
        self.gamma / self.dx
    }

    /// Convective mass flux `F = ρ u`
    pub fn convection(&self) -> f64 {
        self.density * self.velocity
    }
}

impl From<&Domain> for SchemeInputs {
    fn from(domain: &Domain) -> Self {
        Self {
            gamma: domain.gamma(),
            dx: domain.dx(),
            density: domain.density(),
            velocity: domain.velocity(),
            local_peclet: domain.local_peclet(),
        }
    }
}

// =================================================================================================
// Coefficient Set
// =================================================================================================

/// Uniform tridiagonal weights of the discrete balance
///
/// ```text
/// a · φ_i = b · φ_{i+1} + c · φ_{i-1}
/// ```
///
/// The Thomas forward sweep carries `b`; the upstream neighbour enters
/// through `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    /// Central weight
    pub a: f64,

    /// Weight coupling node `i` to `i + 1`
    pub b: f64,

    /// Weight coupling node `i` to `i - 1`
    pub c: f64,
}

impl CoefficientSet {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// `a - (b + c)`, zero for a flux-conserving set
    pub fn imbalance(&self) -> f64 {
        self.a - (self.b + self.c)
    }

    /// Whether both neighbour weights are non-negative
    ///
    /// Negative neighbour weights allow a bounded solution to over/undershoot
    /// its boundary values.
    pub fn is_positive(&self) -> bool {
        self.b >= 0.0 && self.c >= 0.0
    }
}

// =================================================================================================
// Differencing Scheme Trait
// =================================================================================================

/// Discretization rule for the convective flux
///
/// Implementations are pure: the same inputs always give the same set.
pub trait DifferencingScheme: Send + Sync {
    /// Compute the tridiagonal weights
    fn coefficients(&self, inputs: &SchemeInputs) -> CoefficientSet;

    /// Short identifier (e.g. "CDS")
    fn acronym(&self) -> &'static str;

    /// Full name (e.g. "Central Differencing Scheme")
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Tests
// =================================================================================================
