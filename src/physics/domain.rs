//! Domain and grid model
//!
//! [`DomainParameters`] holds the physical inputs of one run. Validating them
//! through [`Domain::new`] builds the uniform [`Grid`] and the derived Péclet
//! numbers. Both types are immutable once constructed.
//!
//! # Grid convention
//!
//! ```text
//! dx = L / N
//! x_i = i · dx,   i = 0 .. N-1
//! ```
//!
//! The inlet value is pinned at `x_0 = 0` and the outlet value at the last
//! node `x_{N-1} = L - dx`.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::{ConvDiffError, Result};

/// Largest accepted node count
///
/// The analytical reference holds 50 samples per node, so this keeps one run
/// under a few tens of megabytes.
pub const MAX_GRIDPOINTS: usize = 100_000;

// =================================================================================================
// Domain Parameters
// =================================================================================================

/// Physical parameters of a steady convection-diffusion run
///
/// Defaults reproduce the reference configuration: `u = 1 m/s`,
/// `ρ = 0.5 kg/m³`, `Γ = 0.5`, `L = 1 m`, `φ₀ = 100`, `φ_L = 20`, `N = 10`.
///
/// # Example
///
/// ```rust
/// use convdiff_rs::physics::DomainParameters;
///
/// let params = DomainParameters::default()
///     .velocity(2.0)
///     .gridpoints(5);
///
/// assert_eq!(params.velocity, 2.0);
/// assert_eq!(params.gridpoints, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainParameters {
    /// Fluid velocity u (m/s), signed
    pub velocity: f64,

    /// Fluid density ρ (kg/m³)
    pub density: f64,

    /// Diffusion coefficient Γ
    pub gamma: f64,

    /// Domain length L (m)
    pub length: f64,

    /// Dirichlet value at the inlet, φ₀
    pub inlet_bc: f64,

    /// Dirichlet value at the outlet, φ_L
    pub outlet_bc: f64,

    /// Number of grid nodes N
    pub gridpoints: usize,
}

impl Default for DomainParameters {
    fn default() -> Self {
        Self {
            velocity: 1.0,
            density: 0.5,
            gamma: 0.5,
            length: 1.0,
            inlet_bc: 100.0,
            outlet_bc: 20.0,
            gridpoints: 10,
        }
    }
}

impl DomainParameters {
    /// Builder pattern: set velocity
    pub fn velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder pattern: set density
    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Builder pattern: set diffusion coefficient
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Builder pattern: set domain length
    pub fn length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Builder pattern: set both Dirichlet values
    pub fn boundaries(mut self, inlet_bc: f64, outlet_bc: f64) -> Self {
        self.inlet_bc = inlet_bc;
        self.outlet_bc = outlet_bc;
        self
    }

    /// Builder pattern: set gridpoint count
    pub fn gridpoints(mut self, gridpoints: usize) -> Self {
        self.gridpoints = gridpoints;
        self
    }

    /// Check that the parameters describe a solvable problem
    ///
    /// # Errors
    ///
    /// [`ConvDiffError::InvalidParameter`] when:
    /// - `gridpoints < 2` (no room for two boundary nodes)
    /// - `gridpoints > MAX_GRIDPOINTS`
    /// - `length <= 0`
    /// - `gamma <= 0`
    /// - any real-valued parameter is NaN or infinite
    pub fn validate(&self) -> Result<()> {
        let reals = [
            ("velocity", self.velocity),
            ("density", self.density),
            ("gamma", self.gamma),
            ("length", self.length),
            ("inlet_bc", self.inlet_bc),
            ("outlet_bc", self.outlet_bc),
        ];

        for (name, value) in reals {
            if !value.is_finite() {
                return Err(ConvDiffError::invalid_parameter(
                    name,
                    format!("must be finite, got {value}"),
                ));
            }
        }

        if self.gridpoints < 2 {
            return Err(ConvDiffError::invalid_parameter(
                "gridpoints",
                format!("must be at least 2, got {}", self.gridpoints),
            ));
        }

        if self.gridpoints > MAX_GRIDPOINTS {
            return Err(ConvDiffError::invalid_parameter(
                "gridpoints",
                format!("must be at most {MAX_GRIDPOINTS}, got {}", self.gridpoints),
            ));
        }

        if self.length <= 0.0 {
            return Err(ConvDiffError::invalid_parameter(
                "length",
                format!("must be positive, got {}", self.length),
            ));
        }

        if self.gamma <= 0.0 {
            return Err(ConvDiffError::invalid_parameter(
                "gamma",
                format!("must be positive, got {}", self.gamma),
            ));
        }

        Ok(())
    }
}

// =================================================================================================
// Grid
// =================================================================================================

/// Uniform 1D grid of node positions
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    nodes: DVector<f64>,
    spacing: f64,
}

impl Grid {
    /// Build `count` nodes at `x_i = i · spacing`
    pub fn uniform(count: usize, spacing: f64) -> Self {
        let nodes = DVector::from_fn(count, |i, _| i as f64 * spacing);
        Self { nodes, spacing }
    }

    /// Node positions
    pub fn nodes(&self) -> &DVector<f64> {
        &self.nodes
    }

    /// Node positions as a slice
    pub fn as_slice(&self) -> &[f64] {
        self.nodes.as_slice()
    }

    /// Distance between neighbouring nodes
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// =================================================================================================
// Domain
// =================================================================================================

/// Validated domain: parameters, grid and derived quantities
///
/// # Example
///
/// ```rust
/// use convdiff_rs::physics::{Domain, DomainParameters};
///
/// let domain = Domain::new(DomainParameters::default().velocity(2.0).gridpoints(5))?;
///
/// assert!((domain.dx() - 0.2).abs() < 1e-12);
/// assert!((domain.global_peclet() - 2.0).abs() < 1e-12);
/// assert!((domain.local_peclet() - 0.4).abs() < 1e-12);
/// # Ok::<(), convdiff_rs::ConvDiffError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    parameters: DomainParameters,
    grid: Grid,
    global_peclet: f64,
    local_peclet: f64,
}

impl Domain {
    /// Validate `parameters` and build the grid
    ///
    /// # Errors
    ///
    /// Propagates [`DomainParameters::validate`] failures.
    pub fn new(parameters: DomainParameters) -> Result<Self> {
        parameters.validate()?;

        let dx = parameters.length / parameters.gridpoints as f64;
        let convection = parameters.density * parameters.velocity;

        let domain = Self {
            parameters,
            grid: Grid::uniform(parameters.gridpoints, dx),
            global_peclet: convection * parameters.length / parameters.gamma,
            local_peclet: convection * dx / parameters.gamma,
        };

        log::trace!(
            "domain built: N={}, dx={:.6}, Pe_global={:.6}, Pe_local={:.6}",
            domain.gridpoints(),
            dx,
            domain.global_peclet,
            domain.local_peclet
        );

        Ok(domain)
    }

    /// Parameters this domain was built from
    pub fn parameters(&self) -> &DomainParameters {
        &self.parameters
    }

    /// Node grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid spacing `L / N`
    pub fn dx(&self) -> f64 {
        self.grid.spacing()
    }

    /// `ρ u L / Γ`
    pub fn global_peclet(&self) -> f64 {
        self.global_peclet
    }

    /// `ρ u dx / Γ`
    pub fn local_peclet(&self) -> f64 {
        self.local_peclet
    }

    pub fn velocity(&self) -> f64 {
        self.parameters.velocity
    }

    pub fn density(&self) -> f64 {
        self.parameters.density
    }

    pub fn gamma(&self) -> f64 {
        self.parameters.gamma
    }

    pub fn length(&self) -> f64 {
        self.parameters.length
    }

    pub fn inlet_bc(&self) -> f64 {
        self.parameters.inlet_bc
    }

    pub fn outlet_bc(&self) -> f64 {
        self.parameters.outlet_bc
    }

    pub fn gridpoints(&self) -> usize {
        self.parameters.gridpoints
    }
}

// =================================================================================================
// Tests
// =================================================================================================
