//! Error types for the convection-diffusion engine
//!
//! Every failure the engine can produce is a distinct variant of
//! [`ConvDiffError`]. Nothing is recovered inside the engine: callers decide
//! whether to report, retry or abort.

use thiserror::Error;

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, ConvDiffError>;

/// Failures of the discretize-and-solve engine
#[derive(Debug, Error)]
pub enum ConvDiffError {
    /// A physical or grid parameter is outside its valid range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name (e.g. `gridpoints`)
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Unknown differencing scheme identifier
    #[error("invalid scheme `{0}`: expected one of CDS, UDS, PLDS")]
    InvalidScheme(String),

    /// Near-zero pivot (or non-finite value) during the Thomas sweep
    #[error("numerical singularity at node {node}: pivot = {pivot:e}")]
    NumericalSingularity {
        /// Node index where elimination broke down
        node: usize,
        /// Offending pivot or value
        pivot: f64,
    },

    /// Singular case of the analytical formula or of the error metric
    #[error("domain error: {0}")]
    DomainError(String),

    /// Malformed configuration record
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvDiffError {
    /// Shorthand for [`ConvDiffError::InvalidParameter`]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ConvDiffError {
    fn from(error: serde_json::Error) -> Self {
        Self::Configuration(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ConvDiffError::invalid_parameter("gridpoints", "must be at least 2, got 1");
        let message = err.to_string();
        assert!(message.contains("gridpoints"));
        assert!(message.contains("at least 2"));
    }

    #[test]
    fn test_invalid_scheme_display() {
        let err = ConvDiffError::InvalidScheme("QUICK".to_string());
        assert!(err.to_string().contains("QUICK"));
    }

    #[test]
    fn test_json_error_maps_to_configuration() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope");
        let err: ConvDiffError = parse.unwrap_err().into();
        assert!(matches!(err, ConvDiffError::Configuration(_)));
    }
}
