//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation.
    ///
    /// Displays the bare message so callers can match on the exact rule text
    /// (e.g. `"Name cannot be empty."`).
    #[error("{0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A mapping carried keys that are not declared fields of the target type.
    #[error("unknown field(s) {} for {type_name}", .fields.join(", "))]
    UnknownFields {
        type_name: &'static str,
        fields: Vec<String>,
    },

    /// A mapping could not be turned into the target type (missing field, wrong type).
    #[error("invalid mapping for {type_name}: {reason}")]
    Mapping {
        type_name: &'static str,
        reason: String,
    },

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. duplicate identifier).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_fields(type_name: &'static str, fields: Vec<String>) -> Self {
        Self::UnknownFields { type_name, fields }
    }

    pub fn mapping(type_name: &'static str, reason: impl Into<String>) -> Self {
        Self::Mapping {
            type_name,
            reason: reason.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
