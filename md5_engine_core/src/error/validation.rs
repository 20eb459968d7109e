//! Validation related error types

use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text could not be parsed as a hex-encoded digest
    #[error("Invalid digest hex '{input}': {reason}")]
    InvalidDigestHex { input: String, reason: String },

    /// Invalid input parameter
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
}

impl ValidationError {
    /// Create an invalid digest hex error
    pub fn invalid_digest_hex(input: &str, reason: &str) -> Self {
        Self::InvalidDigestHex {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
        }
    }
}
