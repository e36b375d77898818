//! Unified error type definition

use thiserror::Error;

// Re-export library error type
pub use domain_console_api::ApiError;

use crate::form::ValidationError;
use crate::table::TransitionError;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Form input rejected before any request was made
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Request error (converting from library)
    #[error("{0}")]
    RequestFailed(#[from] ApiError),

    /// Edit submitted without a record identifier
    #[error("Domain ID is missing")]
    MissingIdentifier,

    /// Panel state machine rejected an event
    #[error("{0}")]
    Transition(#[from] TransitionError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::MissingIdentifier | Self::Transition(_) => true,
            Self::RequestFailed(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
