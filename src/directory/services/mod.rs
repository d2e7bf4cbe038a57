//! Application services for employee directory management.

mod admin;

pub use admin::{DirectoryError, DirectoryResult, DirectoryService, NewEmployeeRequest};
