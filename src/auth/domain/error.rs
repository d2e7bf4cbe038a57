//! Error types for authorization predicates and role parsing.

use super::Role;
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned when an authorization predicate fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The caller's role does not satisfy the operation's requirement.
    #[error("operation requires the {required} role")]
    RoleMismatch {
        /// Role the operation demands.
        required: Role,
    },
}

impl AccessError {
    /// Maps the error to its outcome classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::RoleMismatch { .. } => ErrorKind::Forbidden,
        }
    }
}

/// Error returned while parsing roles from persistence or token claims.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
