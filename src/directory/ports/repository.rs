//! Repository port for employee persistence and hierarchy queries.

use crate::directory::domain::{Employee, EmployeeEmail};
use crate::error::ErrorKind;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for employee repository operations.
pub type EmployeeRepositoryResult<T> = Result<T, EmployeeRepositoryError>;

/// Employee persistence contract.
///
/// Implementations must enforce email uniqueness; each call executes as a
/// single store transaction with rollback on constraint violation.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new employee.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::DuplicateEmail`] when the email is
    /// already registered, or [`EmployeeRepositoryError::UnknownManager`]
    /// when the manager reference fails the store's foreign-key constraint;
    /// the store must be left unchanged in either case.
    async fn insert(&self, employee: &Employee) -> EmployeeRepositoryResult<()>;

    /// Finds an employee by email.
    ///
    /// Returns `None` when no such employee exists.
    async fn find_by_email(
        &self,
        email: &EmployeeEmail,
    ) -> EmployeeRepositoryResult<Option<Employee>>;

    /// Returns all employees.
    async fn list(&self) -> EmployeeRepositoryResult<Vec<Employee>>;

    /// Deletes an employee by email.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::NotFound`] when the employee does
    /// not exist.
    async fn delete(&self, email: &EmployeeEmail) -> EmployeeRepositoryResult<()>;

    /// Returns `true` when at least one employee lists the given email as
    /// manager.
    async fn has_subordinates(&self, manager: &EmployeeEmail) -> EmployeeRepositoryResult<bool>;
}

/// Errors returned by employee repository implementations.
#[derive(Debug, Clone, Error)]
pub enum EmployeeRepositoryError {
    /// An employee with the same email already exists.
    #[error("duplicate employee email: {0}")]
    DuplicateEmail(EmployeeEmail),

    /// The employee was not found.
    #[error("employee not found: {0}")]
    NotFound(EmployeeEmail),

    /// A manager reference does not match any employee.
    #[error("unknown manager reference: {0}")]
    UnknownManager(EmployeeEmail),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EmployeeRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Maps the error to its outcome classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateEmail(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::UnknownManager(_) => ErrorKind::InvalidRequest,
            Self::Persistence(_) => ErrorKind::Internal,
        }
    }
}
