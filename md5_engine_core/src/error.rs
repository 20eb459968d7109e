//! Error types for the MD5 Engine Core Library
//!
//! Errors are split into two categories: engine state violations and input
//! validation failures.

use thiserror::Error;

pub mod state;
pub mod validation;

pub use self::state::StateError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the MD5 Engine Core Library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operation not permitted in the engine's current state
    #[error(transparent)]
    State(#[from] StateError),

    /// Invalid input or parameter
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Check if the caller can recover from this error without discarding
    /// the value that produced it
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::State(err) => err.is_recoverable(),
            Self::Validation(_) => false,
        }
    }
}

// Conversions into external error types

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::State(_) => std::io::ErrorKind::Other,
            Error::Validation(_) => std::io::ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, err)
    }
}
