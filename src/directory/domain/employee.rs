//! Employee aggregate root and validated email identifier.

use super::DirectoryDomainError;
use crate::auth::domain::Role;
use crate::auth::password::PasswordHash;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized employee email address, the directory's primary key.
///
/// Validation is deliberately light: a non-empty local part and domain
/// separated by one `@`, no whitespace, lowercased for canonical comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeEmail(String);

impl EmployeeEmail {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::InvalidEmail`] when the value lacks a
    /// local part or domain, has more than one `@`, or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(DirectoryDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmployeeEmail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmployeeEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employee aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    email: EmployeeEmail,
    password_hash: PasswordHash,
    first_name: String,
    last_name: String,
    manager: Option<EmployeeEmail>,
    role: Role,
}

/// Parameter object for reconstructing a persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedEmployeeData {
    /// Persisted email identifier.
    pub email: EmployeeEmail,
    /// Persisted password digest.
    pub password_hash: PasswordHash,
    /// Persisted first name.
    pub first_name: String,
    /// Persisted last name.
    pub last_name: String,
    /// Persisted manager reference, if any.
    pub manager: Option<EmployeeEmail>,
    /// Persisted role.
    pub role: Role,
}

impl Employee {
    /// Creates a new employee, enforcing the hierarchy invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::SelfManager`] when the manager
    /// reference equals the employee's own email, or
    /// [`DirectoryDomainError::MissingManager`] when a non-admin employee
    /// carries no manager.
    pub fn new(
        email: EmployeeEmail,
        password_hash: PasswordHash,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        manager: Option<EmployeeEmail>,
        role: Role,
    ) -> Result<Self, DirectoryDomainError> {
        if manager.as_ref() == Some(&email) {
            return Err(DirectoryDomainError::SelfManager(email));
        }
        match role {
            Role::Admin => {}
            Role::Manager | Role::Developer => {
                if manager.is_none() {
                    return Err(DirectoryDomainError::MissingManager(email));
                }
            }
        }

        Ok(Self {
            email,
            password_hash,
            first_name: first_name.into(),
            last_name: last_name.into(),
            manager,
            role,
        })
    }

    /// Reconstructs an employee from persisted storage without re-running
    /// creation invariants.
    #[must_use]
    pub fn from_persisted(data: PersistedEmployeeData) -> Self {
        Self {
            email: data.email,
            password_hash: data.password_hash,
            first_name: data.first_name,
            last_name: data.last_name,
            manager: data.manager,
            role: data.role,
        }
    }

    /// Returns the email identifier.
    #[must_use]
    pub const fn email(&self) -> &EmployeeEmail {
        &self.email
    }

    /// Returns the stored password digest.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the manager reference, if any.
    #[must_use]
    pub const fn manager(&self) -> Option<&EmployeeEmail> {
        self.manager.as_ref()
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the digest-free read model for this employee.
    #[must_use]
    pub fn profile(&self) -> EmployeeProfile {
        EmployeeProfile {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            manager: self.manager.clone(),
            role: self.role,
        }
    }
}

/// Read model returned from directory listings.
///
/// Carries no password digest field at all, so no caller-facing path can
/// leak one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Email identifier.
    pub email: EmployeeEmail,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Manager reference, if any.
    pub manager: Option<EmployeeEmail>,
    /// Role.
    pub role: Role,
}
