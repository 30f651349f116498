//! Simulation scenario definition
//!
//! A scenario combines a validated domain with the differencing scheme used
//! on it.
use crate::error::Result;
use crate::physics::{Domain, DomainParameters};
use crate::schemes::Scheme;

/// Simulation scenario
///
/// Defines a specific case to solve:
/// - Domain (physical parameters, grid, Péclet numbers)
/// - Differencing scheme for the convective flux
///
/// # Design
///
/// The same domain can be paired with every scheme for comparison.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use convdiff_rs::physics::DomainParameters;
/// use convdiff_rs::schemes::Scheme;
/// use convdiff_rs::solver::Scenario;
///
/// let params = DomainParameters::default().velocity(2.0).gridpoints(5);
/// let scenario = Scenario::new(params, Scheme::Plds)?;
///
/// assert_eq!(scenario.gridpoints(), 5);
/// assert_eq!(scenario.scheme_name(), "PLDS");
/// # Ok::<(), convdiff_rs::ConvDiffError>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct Scenario {
    /// Validated domain
    pub domain: Domain,

    /// Differencing scheme
    pub scheme: Scheme,
}

impl Scenario {
    /// Validate the parameters and create a scenario
    pub fn new(parameters: DomainParameters, scheme: Scheme) -> Result<Self> {
        Ok(Self::from_domain(Domain::new(parameters)?, scheme))
    }

    /// Pair an already validated domain with a scheme
    pub fn from_domain(domain: Domain, scheme: Scheme) -> Self {
        Self { domain, scheme }
    }

    /// Scheme acronym
    pub fn scheme_name(&self) -> &'static str {
        self.scheme.acronym()
    }

    /// Number of grid nodes
    pub fn gridpoints(&self) -> usize {
        self.domain.gridpoints()
    }

    /// Parameters the domain was built from
    pub fn parameters(&self) -> &DomainParameters {
        self.domain.parameters()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("scheme", &self.scheme_name())
            .field("gridpoints", &self.gridpoints())
            .field("velocity", &self.domain.velocity())
            .field("local peclet", &self.domain.local_peclet())
            .field("global peclet", &self.domain.global_peclet())
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
