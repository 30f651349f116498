//! Physical problem definition
//!
//! This module describes WHAT is solved: the steady 1D convection-diffusion
//! balance of a scalar φ between two Dirichlet values.
//!
//! ```text
//! d(ρuφ)/dx = d/dx(Γ dφ/dx)      0 ≤ x ≤ L
//! φ(0) = φ₀,   φ(L) = φ_L
//! ```
//!
//! # Core Concepts
//!
//! - **Domain**: validated physical parameters, uniform grid, Péclet numbers
//! - **Analytical solution**: the exact exponential profile used as reference
//!
//! The discretization (schemes) and the linear solve (solver) live in their
//! own modules, so the same domain can be solved with any scheme.
//!
//! # Example
//!
//! ```rust
//! use convdiff_rs::physics::{analytical, Domain, DomainParameters};
//!
//! let domain = Domain::new(DomainParameters::default().velocity(2.0).gridpoints(5))?;
//!
//! let samples = analytical::REFINEMENT_FACTOR * domain.gridpoints();
//! let reference = analytical::evaluate(
//!     domain.inlet_bc(),
//!     domain.outlet_bc(),
//!     domain.global_peclet(),
//!     domain.length(),
//!     samples,
//! )?;
//!
//! assert_eq!(reference.len(), 250);
//! # Ok::<(), convdiff_rs::ConvDiffError>(())
//! ```

pub mod analytical;
pub mod domain;

pub use domain::{Domain, DomainParameters, Grid, MAX_GRIDPOINTS};
