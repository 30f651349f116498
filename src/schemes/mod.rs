//! Convection differencing schemes
//!
//! A differencing scheme turns the continuous balance into the uniform
//! tridiagonal weights `(a, b, c)` of
//!
//! ```text
//! a · φ_i = b · φ_{i+1} + c · φ_{i-1}
//! ```
//!
//! # Available Schemes
//!
//! | Acronym | Type | Accuracy | Bounded |
//! |---------|------|----------|---------|
//! | `CDS`  | [`CentralDifferencing`]  | 2nd order | only for `\|Pe\| ≤ 2` |
//! | `UDS`  | [`UpwindDifferencing`]   | 1st order | always |
//! | `PLDS` | [`PowerLawDifferencing`] | blends by `\|Pe\|` | always |
//!
//! # Selecting a Scheme
//!
//! [`Scheme`] is the closed set of identifiers. Parsing is exact and
//! case-sensitive; anything else is a [`ConvDiffError::InvalidScheme`].
//!
//! ```rust
//! use convdiff_rs::schemes::{Scheme, SchemeInputs};
//!
//! let scheme: Scheme = "UDS".parse()?;
//! assert_eq!(scheme.description(), "Upwind Differencing Scheme");
//!
//! let set = scheme.coefficients(&SchemeInputs::new(0.5, 0.2, 0.5, 2.0));
//! assert!(set.is_positive());
//!
//! assert!("uds".parse::<Scheme>().is_err());
//! # Ok::<(), convdiff_rs::ConvDiffError>(())
//! ```

pub mod central;
pub mod power_law;
pub mod traits;
pub mod upwind;

pub use central::CentralDifferencing;
pub use power_law::{power_law_factor, PowerLawDifferencing};
pub use traits::{CoefficientSet, DifferencingScheme, SchemeInputs};
pub use upwind::UpwindDifferencing;

use std::fmt;
use std::str::FromStr;

use crate::error::ConvDiffError;

// =================================================================================================
// Scheme Identifier
// =================================================================================================

/// Identifier of a differencing scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Central Differencing Scheme
    Cds,

    /// Upwind Differencing Scheme
    Uds,

    /// Power Law Differencing Scheme
    Plds,
}

static CENTRAL: CentralDifferencing = CentralDifferencing;
static UPWIND: UpwindDifferencing = UpwindDifferencing;
static POWER_LAW: PowerLawDifferencing = PowerLawDifferencing;

impl Scheme {
    /// Every scheme, in comparison order
    pub const ALL: [Scheme; 3] = [Scheme::Cds, Scheme::Uds, Scheme::Plds];

    /// Implementation behind this identifier
    pub fn method(&self) -> &'static dyn DifferencingScheme {
        match self {
            Scheme::Cds => &CENTRAL,
            Scheme::Uds => &UPWIND,
            Scheme::Plds => &POWER_LAW,
        }
    }

    /// Short identifier ("CDS", "UDS", "PLDS")
    pub fn acronym(&self) -> &'static str {
        self.method().acronym()
    }

    /// Human-readable name
    pub fn description(&self) -> &'static str {
        self.method().name()
    }

    /// Tridiagonal weights for `inputs`
    pub fn coefficients(&self, inputs: &SchemeInputs) -> CoefficientSet {
        self.method().coefficients(inputs)
    }
}

impl FromStr for Scheme {
    type Err = ConvDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CDS" => Ok(Scheme::Cds),
            "UDS" => Ok(Scheme::Uds),
            "PLDS" => Ok(Scheme::Plds),
            other => Err(ConvDiffError::InvalidScheme(other.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_schemes() {
        assert_eq!("CDS".parse::<Scheme>().unwrap(), Scheme::Cds);
        assert_eq!("UDS".parse::<Scheme>().unwrap(), Scheme::Uds);
        assert_eq!("PLDS".parse::<Scheme>().unwrap(), Scheme::Plds);
    }

    #[test]
    fn test_parse_rejects_unknown_and_miscased() {
        for input in ["cds", "Uds", " PLDS", "QUICK", ""] {
            let err = input.parse::<Scheme>().unwrap_err();
            match err {
                ConvDiffError::InvalidScheme(name) => assert_eq!(name, input),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_round_trips() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.to_string().parse::<Scheme>().unwrap(), scheme);
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Scheme::Cds.description(), "Central Differencing Scheme");
        assert_eq!(Scheme::Uds.description(), "Upwind Differencing Scheme");
        assert_eq!(Scheme::Plds.description(), "Power Law Differencing Scheme");
    }

    #[test]
    fn test_all_schemes_agree_for_pure_diffusion() {
        let inputs = SchemeInputs::new(0.5, 0.1, 0.5, 0.0);
        let reference = Scheme::Cds.coefficients(&inputs);

        for scheme in Scheme::ALL {
            assert_eq!(scheme.coefficients(&inputs), reference, "{scheme}");
        }
    }
}
