//! Unified error type for the domain layer
//!
//! Keeps error handling consistent across entities, the stat core and the
//! command processor without forcing callers onto String or anyhow.

use thiserror::Error;

use crate::value_objects::ResourceKind;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Spending more of a resource pool than is available. The only
    /// user-facing refusal in the core; every other malformed input
    /// degrades to "treat as zero".
    #[error("Insufficient {resource}: need {needed}, have {available}")]
    InsufficientResource {
        resource: ResourceKind,
        needed: i64,
        available: i64,
    },

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    pub fn insufficient(resource: ResourceKind, needed: i64, available: i64) -> Self {
        Self::InsufficientResource {
            resource,
            needed,
            available,
        }
    }

    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}
