//! Port contracts for employee directory persistence.

mod repository;

pub use repository::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult};
