//! Engine state error types

use thiserror::Error;

/// Errors raised when an operation is not valid for the engine's state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// `update` was called on an engine that has already produced its digest
    #[error(
        "Invalid state: cannot update a finalized digest engine ({total_length} bytes already digested); call reset() first"
    )]
    UpdateAfterFinalize { total_length: u64 },
}

impl StateError {
    /// Create an update-after-finalize error
    pub fn update_after_finalize(total_length: u64) -> Self {
        Self::UpdateAfterFinalize { total_length }
    }

    /// A reset puts the engine back into a usable state
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UpdateAfterFinalize { .. })
    }
}
