use thiserror::Error;

use catalog_core::{DomainError, PersistenceError};

/// Convenient alias for results returned from use cases.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure of a use case.
///
/// Both variants are transparent: the inner error reaches the caller with its kind
/// and message intact, so adapters can map it to their own surface (e.g. 422 for
/// validation failures).
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Entity construction or mutation violated an invariant.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// A repository or unit-of-work call failed (including cancellation).
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl ApplicationError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApplicationError::Validation(e) if e.is_validation())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApplicationError::Persistence(e) if e.is_cancelled())
    }
}
