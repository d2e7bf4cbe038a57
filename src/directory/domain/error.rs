//! Error types for employee directory validation.

use super::EmployeeEmail;
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The email address is structurally invalid.
    #[error("invalid employee email '{0}'")]
    InvalidEmail(String),

    /// The employee lists itself as its own manager.
    #[error("employee {0} cannot be their own manager")]
    SelfManager(EmployeeEmail),

    /// A non-admin employee was created without a manager.
    #[error("non-admin employee {0} must have a manager")]
    MissingManager(EmployeeEmail),
}

impl DirectoryDomainError {
    /// Maps the error to its outcome classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEmail(_) | Self::SelfManager(_) | Self::MissingManager(_) => {
                ErrorKind::InvalidRequest
            }
        }
    }
}
