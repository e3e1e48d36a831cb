//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic input failures. A value that fails
/// validation never comes into existence, so there is nothing to recover.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation at construction time.
    #[error("invalid argument ({field}): {reason}")]
    InvalidArgument {
        /// Name of the offending field (e.g. `"name"`, `"email_address"`).
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },
}

impl DomainError {
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// The field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidArgument { field, .. } => field,
        }
    }

    /// The bare human-readable message, without the field prefix.
    pub fn reason(&self) -> &str {
        match self {
            DomainError::InvalidArgument { reason, .. } => reason,
        }
    }
}
