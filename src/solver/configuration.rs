//! Serializable run configuration
//!
//! A flat JSON record with one field per physical parameter plus the scheme
//! acronym. Every field is optional; missing fields take the defaults of
//! [`DomainParameters`].
//!
//! ```json
//! { "scheme": "UDS", "velocity": 2.0, "gridpoints": 5 }
//! ```
//!
//! [`RunConfiguration::validate`] is the only way from a record to a
//! [`Scenario`], so nothing unvalidated reaches the solver.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::physics::DomainParameters;
use crate::schemes::Scheme;
use crate::solver::Scenario;

fn default_scheme() -> String {
    "CDS".to_string()
}

fn default_velocity() -> f64 {
    DomainParameters::default().velocity
}

fn default_density() -> f64 {
    DomainParameters::default().density
}

fn default_gamma() -> f64 {
    DomainParameters::default().gamma
}

fn default_length() -> f64 {
    DomainParameters::default().length
}

fn default_inlet_bc() -> f64 {
    DomainParameters::default().inlet_bc
}

fn default_outlet_bc() -> f64 {
    DomainParameters::default().outlet_bc
}

fn default_gridpoints() -> usize {
    DomainParameters::default().gridpoints
}

/// One solve request as read from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfiguration {
    /// Scheme acronym, checked in [`validate`](Self::validate)
    #[serde(default = "default_scheme")]
    pub scheme: String,

    #[serde(default = "default_velocity")]
    pub velocity: f64,

    #[serde(default = "default_density")]
    pub density: f64,

    #[serde(default = "default_gamma")]
    pub gamma: f64,

    #[serde(default = "default_length")]
    pub length: f64,

    #[serde(default = "default_inlet_bc")]
    pub inlet_bc: f64,

    #[serde(default = "default_outlet_bc")]
    pub outlet_bc: f64,

    #[serde(default = "default_gridpoints")]
    pub gridpoints: usize,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self::from_parts(Scheme::Cds, &DomainParameters::default())
    }
}

impl RunConfiguration {
    /// Record describing `parameters` solved with `scheme`
    pub fn from_parts(scheme: Scheme, parameters: &DomainParameters) -> Self {
        Self {
            scheme: scheme.acronym().to_string(),
            velocity: parameters.velocity,
            density: parameters.density,
            gamma: parameters.gamma,
            length: parameters.length,
            inlet_bc: parameters.inlet_bc,
            outlet_bc: parameters.outlet_bc,
            gridpoints: parameters.gridpoints,
        }
    }

    /// Parse a JSON record
    ///
    /// # Errors
    ///
    /// [`ConvDiffError::Configuration`](crate::ConvDiffError::Configuration)
    /// on malformed JSON or wrongly typed fields.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loaded run configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Physical parameters of the record, unchecked
    pub fn parameters(&self) -> DomainParameters {
        DomainParameters {
            velocity: self.velocity,
            density: self.density,
            gamma: self.gamma,
            length: self.length,
            inlet_bc: self.inlet_bc,
            outlet_bc: self.outlet_bc,
            gridpoints: self.gridpoints,
        }
    }

    /// Check the scheme and the parameters, then build the scenario
    ///
    /// # Example
    ///
    /// ```rust
    /// use convdiff_rs::solver::RunConfiguration;
    ///
    /// let config = RunConfiguration::from_json_str(r#"{"scheme": "PLDS", "gridpoints": 20}"#)?;
    /// let scenario = config.validate()?;
    ///
    /// assert_eq!(scenario.scheme_name(), "PLDS");
    /// assert_eq!(scenario.gridpoints(), 20);
    /// # Ok::<(), convdiff_rs::ConvDiffError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ConvDiffError::InvalidScheme`](crate::ConvDiffError::InvalidScheme)
    /// - [`ConvDiffError::InvalidParameter`](crate::ConvDiffError::InvalidParameter)
    pub fn validate(&self) -> Result<Scenario> {
        let scheme: Scheme = self.scheme.parse()?;
        Scenario::new(self.parameters(), scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvDiffError;

    #[test]
    fn test_empty_object_takes_defaults() {
        let config = RunConfiguration::from_json_str("{}").unwrap();
        assert_eq!(config, RunConfiguration::default());
        assert_eq!(config.scheme, "CDS");
        assert_eq!(config.parameters(), DomainParameters::default());
    }

    #[test]
    fn test_partial_record() {
        let config = RunConfiguration::from_json_str(r#"{"velocity": -2.5, "gridpoints": 40}"#).unwrap();
        assert_eq!(config.velocity, -2.5);
        assert_eq!(config.gridpoints, 40);
        assert_eq!(config.density, 0.5);
    }

    #[test]
    fn test_json_round_trip() {
        let config = RunConfiguration::from_parts(Scheme::Uds, &DomainParameters::default().velocity(3.0));
        let json = config.to_json().unwrap();
        assert_eq!(RunConfiguration::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        let err = RunConfiguration::from_json_str(r#"{"velocity": "fast"}"#).unwrap_err();
        assert!(matches!(err, ConvDiffError::Configuration(_)));
    }

    #[test]
    fn test_unknown_scheme_fails_validation() {
        let config = RunConfiguration {
            scheme: "QUICK".to_string(),
            ..RunConfiguration::default()
        };
        assert!(matches!(config.validate(), Err(ConvDiffError::InvalidScheme(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RunConfiguration::from_path("/nonexistent/run.json").unwrap_err();
        assert!(matches!(err, ConvDiffError::Io(_)));
    }
}
