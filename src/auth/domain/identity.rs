//! Authenticated caller identity and role predicates.

use super::{AccessError, Role};
use crate::directory::domain::EmployeeEmail;

/// Identity resolved from a verified bearer token.
///
/// Every mutating or listing operation evaluates its predicate against an
/// `Identity` before touching the store; predicate failure aborts the
/// operation with no partial effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    subject: EmployeeEmail,
    role: Role,
}

impl Identity {
    /// Creates an identity from a verified subject and role.
    #[must_use]
    pub const fn new(subject: EmployeeEmail, role: Role) -> Self {
        Self { subject, role }
    }

    /// Returns the subject employee email.
    #[must_use]
    pub const fn subject(&self) -> &EmployeeEmail {
        &self.subject
    }

    /// Returns the role carried by the credential.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Requires the caller to hold exactly the given role.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::RoleMismatch`] when the held role differs from
    /// the required one.
    pub const fn require_role(&self, required: Role) -> Result<(), AccessError> {
        match (self.role, required) {
            (Role::Admin, Role::Admin)
            | (Role::Manager, Role::Manager)
            | (Role::Developer, Role::Developer) => Ok(()),
            (
                Role::Admin | Role::Manager | Role::Developer,
                Role::Admin | Role::Manager | Role::Developer,
            ) => Err(AccessError::RoleMismatch { required }),
        }
    }

    /// Returns `true` when the identity refers to the given employee.
    #[must_use]
    pub fn is(&self, email: &EmployeeEmail) -> bool {
        self.subject == *email
    }
}
