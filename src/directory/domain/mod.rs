//! Domain model for the employee directory.
//!
//! The employee aggregate enforces the hierarchy invariants at construction
//! so invalid records are rejected before they can reach persistence.

mod employee;
mod error;

pub use employee::{Employee, EmployeeEmail, EmployeeProfile, PersistedEmployeeData};
pub use error::DirectoryDomainError;
