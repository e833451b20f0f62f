//! Domain and persistence error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by persistence capabilities (repositories, units of work).
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. The validation
/// message is user-facing copy and is displayed verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity was constructed or mutated into a state violating an invariant.
    #[error("{0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

/// Persistence operation error.
///
/// These are **infrastructure errors** reported by repository and unit-of-work
/// implementations. The domain and application layers never interpret them; they are
/// handed to the caller as they were produced.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The cancellation signal was active when the operation was invoked or while
    /// it was in flight.
    #[error("operation cancelled")]
    Cancelled,

    /// The write conflicts with already-persisted state (e.g. duplicate identity).
    #[error("persistence conflict: {0}")]
    Conflict(String),

    /// The backing store cannot serve the request right now.
    #[error("persistence unavailable: {0}")]
    Unavailable(String),

    /// Backend-specific failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PersistenceError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, PersistenceError::Cancelled)
    }
}
