//! Port contracts for task persistence and notification delivery.

mod notifier;
mod repository;

pub use notifier::{Notifier, NotifierError};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
