//! Admin-gated service for employee creation, listing, and deletion.

use crate::auth::domain::{AccessError, Identity, Role};
use crate::auth::password::{self, PasswordError};
use crate::directory::{
    domain::{DirectoryDomainError, Employee, EmployeeEmail, EmployeeProfile},
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use crate::error::ErrorKind;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployeeRequest {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    manager: Option<String>,
    role: Role,
}

impl NewEmployeeRequest {
    /// Creates a request with the required fields and no manager.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            manager: None,
            role,
        }
    }

    /// Sets the manager reference. An empty or blank value is treated as
    /// "no manager", matching the inbound form semantics.
    #[must_use]
    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = Some(manager.into());
        self
    }
}

/// Service-level errors for directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Authorization predicate failed.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),

    /// Password hashing failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// The target employee does not exist.
    #[error("employee {0} not found")]
    UnknownEmployee(EmployeeEmail),

    /// The manager reference does not match any employee record.
    #[error("manager {0} is not a known employee")]
    UnknownManager(EmployeeEmail),

    /// Administrators may not delete their own account.
    #[error("cannot delete your own account")]
    SelfDeletion,

    /// Admin records cannot be deleted through the directory path.
    #[error("employee {0} holds the admin role and cannot be deleted")]
    AdminDeletion(EmployeeEmail),

    /// The target still manages other employees.
    #[error("employee {0} still has subordinates")]
    HasSubordinates(EmployeeEmail),
}

impl DirectoryError {
    /// Maps the error to its outcome classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Access(err) => err.kind(),
            Self::Domain(err) => err.kind(),
            Self::Repository(err) => err.kind(),
            Self::Password(err) => err.kind(),
            Self::UnknownEmployee(_) => ErrorKind::NotFound,
            Self::UnknownManager(_)
            | Self::SelfDeletion
            | Self::AdminDeletion(_)
            | Self::HasSubordinates(_) => ErrorKind::InvalidRequest,
        }
    }
}

/// Result type for directory service operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Employee directory orchestration service.
///
/// Every operation requires the caller to hold the admin role; predicate
/// failure aborts before any store access.
#[derive(Clone)]
pub struct DirectoryService<R>
where
    R: EmployeeRepository,
{
    repository: Arc<R>,
}

impl<R> DirectoryService<R>
where
    R: EmployeeRepository,
{
    /// Creates a new directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new employee with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the caller is not an admin, the
    /// hierarchy invariants are violated, the manager reference matches no
    /// record, or the email is already registered. No partial write occurs
    /// on failure.
    pub async fn add_employee(
        &self,
        identity: &Identity,
        request: NewEmployeeRequest,
    ) -> DirectoryResult<EmployeeProfile> {
        identity.require_role(Role::Admin)?;

        let email = EmployeeEmail::new(request.email)?;
        let manager = match request.manager {
            Some(raw) if !raw.trim().is_empty() => Some(EmployeeEmail::new(raw)?),
            Some(_) | None => None,
        };
        let digest = password::hash(&request.password)?;
        let employee = Employee::new(
            email,
            digest,
            request.first_name,
            request.last_name,
            manager,
            request.role,
        )?;

        if let Some(reference) = employee.manager() {
            if self.repository.find_by_email(reference).await?.is_none() {
                return Err(DirectoryError::UnknownManager(reference.clone()));
            }
        }

        self.repository.insert(&employee).await?;
        tracing::info!(employee = %employee.email(), role = %employee.role(), "employee registered");
        Ok(employee.profile())
    }

    /// Lists employees, optionally filtered to a single email.
    ///
    /// Returned profiles never carry a password digest.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownEmployee`] when a filter email does
    /// not match any record, or [`DirectoryError::Access`] for non-admin
    /// callers.
    pub async fn list_employees(
        &self,
        identity: &Identity,
        filter: Option<&EmployeeEmail>,
    ) -> DirectoryResult<Vec<EmployeeProfile>> {
        identity.require_role(Role::Admin)?;

        match filter {
            Some(email) => {
                let employee = self
                    .repository
                    .find_by_email(email)
                    .await?
                    .ok_or_else(|| DirectoryError::UnknownEmployee(email.clone()))?;
                Ok(vec![employee.profile()])
            }
            None => {
                let employees = self.repository.list().await?;
                Ok(employees.iter().map(Employee::profile).collect())
            }
        }
    }

    /// Deletes an employee record.
    ///
    /// # Errors
    ///
    /// Rejects self-deletion, deletion of admin records, and deletion of
    /// managers that still have subordinates; returns
    /// [`DirectoryError::UnknownEmployee`] when the target does not exist.
    pub async fn delete_employee(
        &self,
        identity: &Identity,
        email: &EmployeeEmail,
    ) -> DirectoryResult<()> {
        identity.require_role(Role::Admin)?;

        if identity.is(email) {
            return Err(DirectoryError::SelfDeletion);
        }

        let employee = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DirectoryError::UnknownEmployee(email.clone()))?;

        match employee.role() {
            Role::Admin => return Err(DirectoryError::AdminDeletion(email.clone())),
            Role::Manager | Role::Developer => {}
        }

        if self.repository.has_subordinates(email).await? {
            return Err(DirectoryError::HasSubordinates(email.clone()));
        }

        self.repository.delete(email).await?;
        tracing::info!(employee = %email, "employee deleted");
        Ok(())
    }
}
